//! Stateless session tokens for authenticated admins.
//!
//! Tokens are HS256 JWTs carrying the admin id, the issue time, and an expiry
//! a fixed duration later (30 days unless configured otherwise). Nothing is
//! stored server-side and nothing is revoked; expiry is the only bound on a
//! token's life.
//!
//! ```rust
//! use jobboard_admin::jwt::{TokenConfig, TokenService};
//!
//! let config = TokenConfig::new("an-example-secret-that-is-32-bytes!").unwrap();
//! let tokens = TokenService::new(config);
//!
//! let issued = tokens.issue(7).unwrap();
//! assert_eq!(tokens.verify(issued.token.expose_secret()).unwrap(), 7);
//! ```

mod claims;
mod config;
mod service;

pub use claims::TokenClaims;
pub use config::{MIN_SECRET_LENGTH, SECRET_ENV, TokenConfig};
pub use service::{IssuedToken, TokenService};
