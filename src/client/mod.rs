//! Login page controller.
//!
//! Drives the admin sign-in form: field checks before any network call, one
//! login request per submit, remember-me persistence, and the timed error,
//! shake, and redirect effects. The page itself sits behind [`LoginView`],
//! browser storage behind [`ClientStorage`], and the backend behind
//! [`LoginApi`], so the whole flow runs against in-memory fakes in tests.

mod api;
mod controller;
mod http;
mod messages;
mod storage;
mod timers;
mod view;

pub use api::{ClientError, LoginApi, LoginReply};
pub use controller::{LANDING_PAGE, LoginController, LoginState, REMEMBER_WINDOW};
pub use http::{DEFAULT_LOGIN_URL, HttpLoginApi};
pub use messages::{Language, Message};
pub use storage::{
    ClientStorage, LANGUAGE_KEY, LOGIN_TIMESTAMP_KEY, MemoryStorage, REMEMBERED_USER_KEY,
    StorageScope, TOKEN_KEY,
};
pub use timers::{ERROR_DISPLAY, FeedbackTimers, REDIRECT_DELAY, SHAKE_DURATION, TimerKind};
pub use view::{Field, LoginView};
