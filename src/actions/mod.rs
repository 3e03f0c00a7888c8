//! Register, login, and first-run seeding of admin accounts.
//!
//! Each action owns its collaborators and is built per request by the HTTP
//! layer. Password hashing runs on tokio's blocking pool.

pub mod login;
pub mod register;
pub mod seed;

pub use login::{LoginAction, LoginOutcome};
pub use register::{RegisterAction, RegisteredAdmin};
pub use seed::{SeedAdminAction, SeedCredentials};
