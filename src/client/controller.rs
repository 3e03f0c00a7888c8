use std::sync::Arc;

use chrono::Duration;

use super::api::{ClientError, LoginApi};
use super::messages::{Language, Message};
use super::storage::{
    ClientStorage, LANGUAGE_KEY, LOGIN_TIMESTAMP_KEY, REMEMBERED_USER_KEY, StorageScope, TOKEN_KEY,
};
use super::timers::{ERROR_DISPLAY, FeedbackTimers, REDIRECT_DELAY, SHAKE_DURATION, TimerKind};
use super::view::{Field, LoginView};
use crate::validators::{PasswordPolicy, UsernamePolicy};
use crate::{Clock, LOG_TARGET, SecretString, SystemClock, ValidationError};

/// Page opened after a successful sign-in.
pub const LANDING_PAGE: &str = "dashboard.html";

/// How long a remembered login pre-fills the form.
pub const REMEMBER_WINDOW: Duration = Duration::hours(24);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// One instance per rendered login page.
pub struct LoginController<A, S, V> {
    api: A,
    storage: S,
    view: V,
    clock: Arc<dyn Clock>,
    timers: FeedbackTimers,
    username_policy: UsernamePolicy,
    password_policy: PasswordPolicy,
    landing_page: String,
    language: Language,
    state: LoginState,
    username: String,
    password: SecretString,
    remember: bool,
    password_visible: bool,
}

impl<A, S, V> LoginController<A, S, V>
where
    A: LoginApi,
    S: ClientStorage,
    V: LoginView,
{
    pub fn new(api: A, storage: S, view: V) -> Self {
        Self::with_clock(api, storage, view, Arc::new(SystemClock))
    }

    pub fn with_clock(api: A, storage: S, view: V, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            storage,
            view,
            clock,
            timers: FeedbackTimers::default(),
            username_policy: UsernamePolicy::login_form(),
            password_policy: PasswordPolicy::login_form(),
            landing_page: LANDING_PAGE.to_owned(),
            language: Language::default(),
            state: LoginState::Idle,
            username: String::new(),
            password: SecretString::default(),
            remember: false,
            password_visible: false,
        }
    }

    #[must_use]
    pub fn with_landing_page(mut self, page: impl Into<String>) -> Self {
        self.landing_page = page.into();
        self
    }

    /// Page load: restore the language, pre-fill a remembered login, focus
    /// the username field.
    pub fn on_load(&mut self) {
        let language = self
            .storage
            .get(StorageScope::Durable, LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        self.set_language(language);

        self.restore_remembered_login();
        self.view.focus(Field::Username);
    }

    fn restore_remembered_login(&mut self) {
        let user = self.storage.get(StorageScope::Durable, REMEMBERED_USER_KEY);
        let stamp = self.storage.get(StorageScope::Durable, LOGIN_TIMESTAMP_KEY);
        let token = self.storage.get(StorageScope::Tab, TOKEN_KEY);

        let (Some(user), Some(stamp), Some(_)) = (user, stamp, token) else {
            return;
        };
        let Ok(stamp) = stamp.trim().parse::<i64>() else {
            return;
        };

        // the stamp comes from user-controlled storage; future or overflowing
        // values are not a remembered login
        let Some(elapsed) = self.clock.now().timestamp_millis().checked_sub(stamp) else {
            return;
        };
        if (0..REMEMBER_WINDOW.num_milliseconds()).contains(&elapsed) {
            self.view.set_username(&user);
            self.username = user;
            self.remember = true;
            self.view.set_remember(true);
        }
    }

    /// Page unload: without remember-me, nothing of the session survives.
    pub fn on_unload(&mut self) {
        if !self.remember {
            self.storage.remove(StorageScope::Tab, TOKEN_KEY);
            self.storage.remove(StorageScope::Durable, REMEMBERED_USER_KEY);
            self.storage.remove(StorageScope::Durable, LOGIN_TIMESTAMP_KEY);
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.view.apply_language(language);
        self.storage
            .set(StorageScope::Durable, LANGUAGE_KEY, language.code());
    }

    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
        self.clear_error();
    }

    pub fn set_password(&mut self, value: impl Into<SecretString>) {
        self.password = value.into();
        self.clear_error();
    }

    pub fn set_remember(&mut self, checked: bool) {
        self.remember = checked;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
        self.view.set_password_visible(self.password_visible);
    }

    /// Highlights a username that is present but too short.
    pub fn blur_username(&mut self) {
        let username = self.username.trim();
        let invalid = !username.is_empty() && self.username_policy.validate(username).is_err();
        self.view.set_field_invalid(Field::Username, invalid);
    }

    /// Highlights a password that is present but too short.
    pub fn blur_password(&mut self) {
        let invalid = !self.password.is_empty()
            && self
                .password_policy
                .validate(self.password.expose_secret())
                .is_err();
        self.view.set_field_invalid(Field::Password, invalid);
    }

    /// Enter moves from username to password, and submits from password.
    ///
    /// # Errors
    ///
    /// See [`LoginController::submit`].
    pub async fn press_enter(&mut self, field: Field) -> Result<(), ClientError> {
        match field {
            Field::Username => {
                self.view.focus(Field::Password);
                Ok(())
            }
            Field::Password => self.submit().await,
        }
    }

    /// Validates the form and, if it passes, sends exactly one login request.
    ///
    /// Calls made while a request is in flight or after a successful login
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` without touching the network when a
    /// field is rejected, `ClientError::Rejected` when the service refused
    /// the credentials, and `ClientError::Network` on transport failure. The
    /// page has already been updated in every case.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if matches!(self.state, LoginState::Submitting | LoginState::Success) {
            return Ok(());
        }

        self.state = LoginState::Validating;
        let username = self.username.trim().to_owned();
        if let Err(err) = self.validate_form(&username) {
            self.state = LoginState::Error;
            self.show_error(Message::from(&err).text(self.language));
            self.view.focus(if err.is_username() {
                Field::Username
            } else {
                Field::Password
            });
            return Err(ClientError::Validation(err));
        }

        self.state = LoginState::Submitting;
        self.view
            .set_loading(true, Message::SignIn.text(self.language));
        self.clear_error();

        let result = self.api.login(&username, &self.password).await;
        self.view
            .set_loading(false, Message::SignIn.text(self.language));

        match result {
            Ok(reply) if reply.success => {
                self.on_success(&username, reply.token);
                Ok(())
            }
            Ok(reply) => {
                let message = match self.language {
                    Language::En => reply
                        .message
                        .unwrap_or_else(|| Message::InvalidCredentials.text(Language::En).to_owned()),
                    Language::Mr => Message::InvalidCredentials.text(Language::Mr).to_owned(),
                };
                self.on_failure(&message);
                Err(ClientError::Rejected(message))
            }
            Err(err) => {
                log::warn!(target: LOG_TARGET, "msg=\"login request failed\", error=\"{err}\"");
                self.on_failure(Message::ConnectionError.text(self.language));
                Err(err)
            }
        }
    }

    /// Fires every timed effect whose deadline has passed.
    pub fn tick(&mut self) {
        for kind in self.timers.take_due(self.clock.now()) {
            match kind {
                TimerKind::HideError => {
                    self.view.hide_error();
                    if self.state == LoginState::Error {
                        self.state = LoginState::Idle;
                    }
                }
                TimerKind::StopShake => self.view.set_shaking(false),
                TimerKind::Redirect => self.view.navigate(&self.landing_page),
            }
        }
    }

    fn validate_form(&self, username: &str) -> Result<(), ValidationError> {
        // both presence checks come before either length check
        if username.is_empty() {
            return Err(ValidationError::UsernameEmpty);
        }
        if self.password.is_empty() {
            return Err(ValidationError::PasswordEmpty);
        }
        self.username_policy.validate(username)?;
        self.password_policy.validate(self.password.expose_secret())
    }

    fn on_success(&mut self, username: &str, token: Option<SecretString>) {
        let now = self.clock.now();

        if self.remember {
            self.storage
                .set(StorageScope::Durable, REMEMBERED_USER_KEY, username);
            self.storage.set(
                StorageScope::Durable,
                LOGIN_TIMESTAMP_KEY,
                &now.timestamp_millis().to_string(),
            );
        }
        if let Some(token) = token {
            self.storage
                .set(StorageScope::Tab, TOKEN_KEY, token.expose_secret());
        }

        self.state = LoginState::Success;
        self.view.show_success(Message::Success.text(self.language));
        self.timers.schedule(TimerKind::Redirect, now + REDIRECT_DELAY);
    }

    fn on_failure(&mut self, message: &str) {
        self.state = LoginState::Error;
        self.show_error(message);

        self.view.set_shaking(true);
        self.timers
            .schedule(TimerKind::StopShake, self.clock.now() + SHAKE_DURATION);

        self.password.clear();
        self.view.clear_password();
        self.view.focus(Field::Password);
    }

    fn show_error(&mut self, message: &str) {
        self.view.show_error(message);
        self.timers
            .schedule(TimerKind::HideError, self.clock.now() + ERROR_DISPLAY);
    }

    fn clear_error(&mut self) {
        self.view.hide_error();
        self.timers.cancel(TimerKind::HideError);
        if self.state == LoginState::Error {
            self.state = LoginState::Idle;
        }
    }

    pub fn state(&self) -> LoginState {
        self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn remember(&self) -> bool {
        self.remember
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn timers(&self) -> &FeedbackTimers {
        &self.timers
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}
