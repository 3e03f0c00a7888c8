use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::api::{ClientError, LoginApi, LoginReply};
use crate::{LOG_TARGET, SecretString};

pub const DEFAULT_LOGIN_URL: &str = "http://localhost:5000/api/admin/login";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct ReplyBody {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    token: Option<SecretString>,
}

/// [`LoginApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLoginApi {
    client: reqwest::Client,
    login_url: String,
}

impl HttpLoginApi {
    /// # Errors
    ///
    /// Returns `ClientError::Network` if the HTTP client cannot be built.
    pub fn new(login_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self::with_client(client, login_url))
    }

    pub fn with_client(client: reqwest::Client, login_url: impl Into<String>) -> Self {
        Self {
            client,
            login_url: login_url.into(),
        }
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl LoginApi for HttpLoginApi {
    async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginReply, ClientError> {
        let response = self
            .client
            .post(&self.login_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&LoginBody {
                username,
                password: password.expose_secret(),
            })
            .send()
            .await
            .map_err(|e| {
                log::warn!(target: LOG_TARGET, "msg=\"login request failed\", error=\"{e}\"");
                ClientError::Network(e.to_string())
            })?;

        let status = response.status();
        let body: ReplyBody = response.json().await.map_err(|e| {
            log::warn!(target: LOG_TARGET, "msg=\"unreadable login reply\", status={status}, error=\"{e}\"");
            ClientError::Network(e.to_string())
        })?;

        Ok(LoginReply {
            success: status.is_success() && body.success,
            message: body.message,
            token: body.token,
        })
    }
}

