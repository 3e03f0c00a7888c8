//! Server configuration read from the environment.
//!
//! `.env` files are honoured through `dotenvy`. Every lookup goes through a
//! closure so tests can supply a map instead of touching process state.
//!
//! ```rust
//! use std::collections::HashMap;
//! use jobboard_admin::config::AppConfig;
//!
//! let env = HashMap::from([(
//!     "JWT_SECRET",
//!     "0123456789abcdef0123456789abcdef",
//! )]);
//! let config = AppConfig::from_lookup(|key| env.get(key).map(|v| (*v).to_owned())).unwrap();
//! assert_eq!(config.port, 5000);
//! ```

use chrono::Duration;

use crate::AuthError;
use crate::SecretString;
use crate::actions::SeedCredentials;
use crate::crypto::Argon2Hasher;
use crate::jwt::{SECRET_ENV, TokenConfig};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://jobboard.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// How the server binary installs its subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `info,jobboard_admin=debug`.
    pub filter: String,
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
            json: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub tokens: TokenConfig,
    pub seed: SeedCredentials,
    /// Empty means any origin is accepted.
    pub cors_origins: Vec<String>,
    pub log: LogConfig,
    pub hasher: Argon2Hasher,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ConfigurationError` when `JWT_SECRET` is missing
    /// or a numeric variable does not parse.
    pub fn from_env() -> Result<Self, AuthError> {
        // a missing .env file is normal outside development
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or(get("PORT"), "PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(
            get("DATABASE_MAX_CONNECTIONS"),
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let expiry_days: i64 = parse_or(get("JWT_EXPIRY_DAYS"), "JWT_EXPIRY_DAYS", 30)?;
        if expiry_days <= 0 {
            return Err(AuthError::ConfigurationError(
                "JWT_EXPIRY_DAYS must be positive".to_owned(),
            ));
        }

        let mut tokens =
            TokenConfig::from_secret(get(SECRET_ENV))?.with_expiry(Duration::days(expiry_days));
        if let Some(issuer) = get("JWT_ISSUER") {
            tokens = tokens.with_issuer(issuer);
        }

        let defaults = SeedCredentials::default();
        let seed = SeedCredentials {
            username: get("SEED_ADMIN_USERNAME").unwrap_or(defaults.username),
            password: get("SEED_ADMIN_PASSWORD")
                .map(SecretString::from)
                .unwrap_or(defaults.password),
        };

        let cors_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let log = LogConfig {
            filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
            json: get("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        };

        let hasher = match get("ARGON2_PROFILE").as_deref() {
            Some("production") => Argon2Hasher::production(),
            _ => Argon2Hasher::default(),
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            max_connections,
            tokens,
            seed,
            cors_origins,
            log,
            hasher,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &str,
    default: T,
) -> Result<T, AuthError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| AuthError::ConfigurationError(format!("{key} has invalid value \"{raw}\""))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, AuthError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.tokens.expiry(), Duration::days(30));
        assert_eq!(config.seed.username, "admin");
        assert_eq!(config.seed.password.expose_secret(), "admin123");
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_missing_secret_fails() {
        let err = load(&[("PORT", "8080")]).unwrap_err();
        assert!(matches!(err, AuthError::ConfigurationError(ref msg) if msg.contains("JWT_SECRET")));
    }

    #[test]
    fn test_blank_secret_counts_as_missing() {
        assert!(load(&[("JWT_SECRET", "   ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("PORT", "8080"),
            ("JWT_EXPIRY_DAYS", "7"),
            ("SEED_ADMIN_USERNAME", "root"),
            ("SEED_ADMIN_PASSWORD", "changeme1"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("LOG_FORMAT", "JSON"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.tokens.expiry(), Duration::days(7));
        assert_eq!(config.seed.username, "root");
        assert_eq!(config.seed.password.expose_secret(), "changeme1");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.log.json);
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        assert!(load(&[("JWT_SECRET", SECRET), ("PORT", "http")]).is_err());
        assert!(load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRY_DAYS", "0")]).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_secrets() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains(SECRET));
        assert!(!debug.contains("admin123"));
    }
}
