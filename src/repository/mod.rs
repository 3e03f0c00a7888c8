//! Credential store abstraction.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`AdminRepository`] | Lookup, creation, and seeding of admin identities |
//! | [`AdminIdentity`] | Default read projection, no password hash |
//! | [`AdminCredentials`] | Identity plus hash, only for verification |
//!
//! Uniqueness of usernames and the "seed only into an empty store" rule are
//! the store's job. Implementations must reject the losing side of a race
//! themselves instead of relying on callers to check first.
//!
//! Enable the `mocks` feature for [`MockAdminRepository`], an in-memory store
//! with the same guarantees.

mod admin;

#[cfg(any(test, feature = "mocks"))]
mod admin_mock;

pub use admin::{AdminCredentials, AdminIdentity, AdminRepository};

#[cfg(any(test, feature = "mocks"))]
pub use admin_mock::MockAdminRepository;
