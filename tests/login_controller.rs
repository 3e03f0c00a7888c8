//! Scenario tests for the login page controller.
//!
//! The backend, page, and storage are in-memory fakes; time is a manual clock.
//! Run with: `cargo test --features client --test login_controller`

#![cfg(feature = "client")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jobboard_admin::client::{
    ClientError, ClientStorage, Field, LOGIN_TIMESTAMP_KEY, Language, LANGUAGE_KEY, LoginApi,
    LoginController, LoginReply, LoginState, LoginView, MemoryStorage, REMEMBERED_USER_KEY,
    StorageScope, TOKEN_KEY, TimerKind,
};
use jobboard_admin::{Clock, ManualClock, SecretString, ValidationError};

#[derive(Clone)]
enum Scripted {
    Accept(&'static str),
    Refuse(Option<&'static str>),
    Unreachable,
}

#[derive(Clone)]
struct FakeApi {
    reply: Scripted,
    calls: Arc<AtomicUsize>,
    last_username: Arc<Mutex<Option<String>>>,
}

impl FakeApi {
    fn new(reply: Scripted) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            last_username: Arc::new(Mutex::new(None)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginApi for FakeApi {
    async fn login(
        &self,
        username: &str,
        _password: &SecretString,
    ) -> Result<LoginReply, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_username.lock().unwrap() = Some(username.to_owned());

        match &self.reply {
            Scripted::Accept(token) => Ok(LoginReply {
                success: true,
                message: Some("Login successful".to_owned()),
                token: Some(SecretString::new(*token)),
            }),
            Scripted::Refuse(message) => Ok(LoginReply {
                success: false,
                message: message.map(ToOwned::to_owned),
                token: None,
            }),
            Scripted::Unreachable => Err(ClientError::Network("connection refused".to_owned())),
        }
    }
}

#[derive(Default)]
struct RecordingView {
    language: Option<Language>,
    error: Option<String>,
    focused: Option<Field>,
    invalid: Vec<(Field, bool)>,
    loading_changes: Vec<bool>,
    button_label: Option<String>,
    shaking: bool,
    username: Option<String>,
    password_cleared: usize,
    remember: bool,
    password_visible: bool,
    navigated_to: Option<String>,
}

impl LoginView for RecordingView {
    fn apply_language(&mut self, language: Language) {
        self.language = Some(language);
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    fn set_field_invalid(&mut self, field: Field, invalid: bool) {
        self.invalid.push((field, invalid));
    }

    fn set_loading(&mut self, loading: bool, idle_label: &str) {
        self.loading_changes.push(loading);
        if !loading {
            self.button_label = Some(idle_label.to_owned());
        }
    }

    fn show_success(&mut self, label: &str) {
        self.button_label = Some(label.to_owned());
    }

    fn set_shaking(&mut self, shaking: bool) {
        self.shaking = shaking;
    }

    fn set_username(&mut self, username: &str) {
        self.username = Some(username.to_owned());
    }

    fn clear_password(&mut self) {
        self.password_cleared += 1;
    }

    fn set_remember(&mut self, checked: bool) {
        self.remember = checked;
    }

    fn set_password_visible(&mut self, visible: bool) {
        self.password_visible = visible;
    }

    fn navigate(&mut self, page: &str) {
        self.navigated_to = Some(page.to_owned());
    }
}

type Controller = LoginController<FakeApi, MemoryStorage, RecordingView>;

fn controller(reply: Scripted, storage: MemoryStorage) -> (Controller, FakeApi, ManualClock) {
    let api = FakeApi::new(reply);
    let clock = ManualClock::starting_now();
    let mut controller = LoginController::with_clock(
        api.clone(),
        storage,
        RecordingView::default(),
        Arc::new(clock.clone()),
    );
    controller.on_load();
    (controller, api, clock)
}

#[tokio::test]
async fn test_short_username_never_reaches_network() {
    let (mut page, api, _) = controller(Scripted::Accept("t"), MemoryStorage::new());
    page.set_username("ab");
    page.set_password("secret1");

    let err = page.submit().await.unwrap_err();

    assert_eq!(err, ClientError::Validation(ValidationError::UsernameTooShort(3)));
    assert_eq!(api.calls(), 0);
    assert_eq!(page.state(), LoginState::Error);
    assert_eq!(
        page.view().error.as_deref(),
        Some("Username must be at least 3 characters long")
    );
    assert_eq!(page.view().focused, Some(Field::Username));
}

#[tokio::test]
async fn test_presence_checked_before_length() {
    let (mut page, api, _) = controller(Scripted::Accept("t"), MemoryStorage::new());
    page.set_username("ab");

    let err = page.submit().await.unwrap_err();

    assert_eq!(err, ClientError::Validation(ValidationError::PasswordEmpty));
    assert_eq!(page.view().focused, Some(Field::Password));
    assert_eq!(api.calls(), 0);
}

#[tokio::test]
async fn test_short_password_in_marathi() {
    let (mut page, api, _) = controller(Scripted::Accept("t"), MemoryStorage::new());
    page.toggle_language();
    page.set_username("alice");
    page.set_password("12345");

    page.submit().await.unwrap_err();

    assert_eq!(api.calls(), 0);
    assert_eq!(page.view().error.as_deref(), Some("पासवर्ड किमान 6 अक्षरांचा असावा"));
}

#[tokio::test]
async fn test_successful_login_with_remember() {
    let (mut page, api, clock) = controller(Scripted::Accept("tok-1"), MemoryStorage::new());
    page.set_username("  alice ");
    page.set_password("secret1");
    page.set_remember(true);

    page.submit().await.unwrap();

    assert_eq!(api.calls(), 1);
    assert_eq!(api.last_username.lock().unwrap().as_deref(), Some("alice"));
    assert_eq!(page.state(), LoginState::Success);
    assert_eq!(page.view().button_label.as_deref(), Some("Success!"));
    assert_eq!(page.view().loading_changes, vec![true, false]);

    let storage = page.storage();
    assert_eq!(storage.get(StorageScope::Tab, TOKEN_KEY).as_deref(), Some("tok-1"));
    assert_eq!(
        storage.get(StorageScope::Durable, REMEMBERED_USER_KEY).as_deref(),
        Some("alice")
    );
    assert_eq!(
        storage.get(StorageScope::Durable, LOGIN_TIMESTAMP_KEY),
        Some(clock.now().timestamp_millis().to_string())
    );

    // redirect waits for its deadline
    page.tick();
    assert_eq!(page.view().navigated_to, None);
    clock.advance(Duration::milliseconds(500));
    page.tick();
    assert_eq!(page.view().navigated_to.as_deref(), Some("dashboard.html"));
}

#[tokio::test]
async fn test_successful_login_without_remember_keeps_only_token() {
    let (mut page, _, _) = controller(Scripted::Accept("tok-1"), MemoryStorage::new());
    page.set_username("alice");
    page.set_password("secret1");

    page.submit().await.unwrap();

    let storage = page.storage();
    assert!(storage.get(StorageScope::Tab, TOKEN_KEY).is_some());
    assert_eq!(storage.get(StorageScope::Durable, REMEMBERED_USER_KEY), None);
    assert_eq!(storage.get(StorageScope::Durable, LOGIN_TIMESTAMP_KEY), None);
}

#[tokio::test]
async fn test_submit_after_success_is_ignored() {
    let (mut page, api, _) = controller(Scripted::Accept("tok-1"), MemoryStorage::new());
    page.set_username("alice");
    page.set_password("secret1");

    page.submit().await.unwrap();
    page.submit().await.unwrap();

    assert_eq!(api.calls(), 1);
}

#[tokio::test]
async fn test_refused_login_shows_service_message() {
    let (mut page, api, clock) = controller(
        Scripted::Refuse(Some("Invalid username or password")),
        MemoryStorage::new(),
    );
    page.set_username("alice");
    page.set_password("wrong-password");

    let err = page.submit().await.unwrap_err();

    assert_eq!(err, ClientError::Rejected("Invalid username or password".to_owned()));
    assert_eq!(api.calls(), 1);
    assert_eq!(page.state(), LoginState::Error);
    assert_eq!(page.view().error.as_deref(), Some("Invalid username or password"));
    assert!(page.view().shaking);
    assert_eq!(page.view().password_cleared, 1);
    assert_eq!(page.view().focused, Some(Field::Password));
    assert_eq!(page.view().button_label.as_deref(), Some("Sign In"));
    assert_eq!(page.storage().get(StorageScope::Tab, TOKEN_KEY), None);

    clock.advance(Duration::milliseconds(500));
    page.tick();
    assert!(!page.view().shaking);
    assert!(page.view().error.is_some());

    clock.advance(Duration::milliseconds(4500));
    page.tick();
    assert_eq!(page.view().error, None);
    assert_eq!(page.state(), LoginState::Idle);
}

#[tokio::test]
async fn test_refused_login_in_marathi_uses_fixed_message() {
    let (mut page, _, _) = controller(
        Scripted::Refuse(Some("Invalid username or password")),
        MemoryStorage::new(),
    );
    page.set_language(Language::Mr);
    page.set_username("alice");
    page.set_password("wrong-password");

    page.submit().await.unwrap_err();

    assert_eq!(
        page.view().error.as_deref(),
        Some("अवैध वापरकर्तानाव किंवा पासवर्ड")
    );
}

#[tokio::test]
async fn test_refusal_without_message_falls_back() {
    let (mut page, _, _) = controller(Scripted::Refuse(None), MemoryStorage::new());
    page.set_username("alice");
    page.set_password("wrong-password");

    page.submit().await.unwrap_err();

    assert_eq!(page.view().error.as_deref(), Some("Invalid username or password"));
}

#[tokio::test]
async fn test_network_failure_shows_connection_message() {
    let (mut page, api, _) = controller(Scripted::Unreachable, MemoryStorage::new());
    page.set_username("alice");
    page.set_password("secret1");

    let err = page.submit().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(api.calls(), 1);
    assert_eq!(
        page.view().error.as_deref(),
        Some("Connection error. Please check your network and try again.")
    );
    assert_eq!(page.state(), LoginState::Error);
}

#[tokio::test]
async fn test_repeated_errors_replace_hide_deadline() {
    let (mut page, _, clock) = controller(Scripted::Refuse(None), MemoryStorage::new());
    page.set_username("alice");

    page.set_password("wrong-password");
    page.submit().await.unwrap_err();
    let first = page.timers().deadline(TimerKind::HideError).unwrap();

    clock.advance(Duration::seconds(3));
    page.set_password("wrong-again");
    page.submit().await.unwrap_err();
    let second = page.timers().deadline(TimerKind::HideError).unwrap();

    assert_eq!(second - first, Duration::seconds(3));

    // the first deadline has passed but the second error must stay visible
    clock.advance(Duration::seconds(3));
    page.tick();
    assert!(page.view().error.is_some());
}

#[tokio::test]
async fn test_unload_without_remember_clears_session() {
    let mut storage = MemoryStorage::new();
    storage.set(StorageScope::Tab, TOKEN_KEY, "tok-1");
    storage.set(StorageScope::Durable, REMEMBERED_USER_KEY, "alice");
    storage.set(StorageScope::Durable, LOGIN_TIMESTAMP_KEY, "0");
    let (mut page, _, _) = controller(Scripted::Accept("t"), storage);

    page.on_unload();

    let storage = page.storage();
    assert_eq!(storage.get(StorageScope::Tab, TOKEN_KEY), None);
    assert_eq!(storage.get(StorageScope::Durable, REMEMBERED_USER_KEY), None);
    assert_eq!(storage.get(StorageScope::Durable, LOGIN_TIMESTAMP_KEY), None);
}

#[tokio::test]
async fn test_unload_with_remember_keeps_session() {
    let (mut page, _, _) = controller(Scripted::Accept("tok-1"), MemoryStorage::new());
    page.set_username("alice");
    page.set_password("secret1");
    page.set_remember(true);
    page.submit().await.unwrap();

    page.on_unload();

    assert!(page.storage().get(StorageScope::Tab, TOKEN_KEY).is_some());
    assert!(page.storage().get(StorageScope::Durable, REMEMBERED_USER_KEY).is_some());
}

fn remembered_storage(login_at_millis: i64) -> MemoryStorage {
    let mut storage = MemoryStorage::new();
    storage.set(StorageScope::Tab, TOKEN_KEY, "tok-1");
    storage.set(StorageScope::Durable, REMEMBERED_USER_KEY, "alice");
    storage.set(
        StorageScope::Durable,
        LOGIN_TIMESTAMP_KEY,
        &login_at_millis.to_string(),
    );
    storage
}

#[tokio::test]
async fn test_recent_remembered_login_is_prefilled() {
    let two_hours_ago = (Utc::now() - Duration::hours(2)).timestamp_millis();
    let (page, _, _) = controller(Scripted::Accept("t"), remembered_storage(two_hours_ago));

    assert_eq!(page.username(), "alice");
    assert!(page.remember());
    assert_eq!(page.view().username.as_deref(), Some("alice"));
    assert!(page.view().remember);
    assert_eq!(page.view().focused, Some(Field::Username));
}

#[tokio::test]
async fn test_stale_remembered_login_is_ignored() {
    let yesterday = (Utc::now() - Duration::hours(25)).timestamp_millis();
    let (page, _, _) = controller(Scripted::Accept("t"), remembered_storage(yesterday));

    assert_eq!(page.username(), "");
    assert!(!page.remember());
    assert_eq!(page.view().username, None);
}

#[tokio::test]
async fn test_prefill_needs_tab_token() {
    let recent = (Utc::now() - Duration::hours(1)).timestamp_millis();
    let mut storage = remembered_storage(recent);
    storage.close_tab();

    let (page, _, _) = controller(Scripted::Accept("t"), storage);

    assert!(!page.remember());
}

#[tokio::test]
async fn test_out_of_range_timestamp_is_not_remembered() {
    let (page, _, _) = controller(Scripted::Accept("t"), remembered_storage(i64::MIN));

    assert_eq!(page.username(), "");
    assert!(!page.remember());
    assert_eq!(page.view().username, None);
}

#[tokio::test]
async fn test_future_timestamp_is_not_remembered() {
    let tomorrow = (Utc::now() + Duration::days(1)).timestamp_millis();
    let (page, _, _) = controller(Scripted::Accept("t"), remembered_storage(tomorrow));

    assert!(!page.remember());
    assert_eq!(page.view().username, None);
}

#[tokio::test]
async fn test_unparsable_timestamp_is_not_remembered() {
    let mut storage = remembered_storage(0);
    storage.set(StorageScope::Durable, LOGIN_TIMESTAMP_KEY, "yesterday");

    let (page, _, _) = controller(Scripted::Accept("t"), storage);

    assert!(!page.remember());
}

#[tokio::test]
async fn test_language_is_restored_and_persisted() {
    let mut storage = MemoryStorage::new();
    storage.set(StorageScope::Durable, LANGUAGE_KEY, "mr");

    let (mut page, _, _) = controller(Scripted::Accept("t"), storage);
    assert_eq!(page.language(), Language::Mr);
    assert_eq!(page.view().language, Some(Language::Mr));

    page.toggle_language();
    assert_eq!(page.language(), Language::En);
    assert_eq!(
        page.storage().get(StorageScope::Durable, LANGUAGE_KEY).as_deref(),
        Some("en")
    );
}

#[tokio::test]
async fn test_enter_key_moves_then_submits() {
    let (mut page, api, _) = controller(Scripted::Accept("t"), MemoryStorage::new());
    page.set_username("alice");
    page.set_password("secret1");

    page.press_enter(Field::Username).await.unwrap();
    assert_eq!(page.view().focused, Some(Field::Password));
    assert_eq!(api.calls(), 0);

    page.press_enter(Field::Password).await.unwrap();
    assert_eq!(api.calls(), 1);
}

#[tokio::test]
async fn test_blur_highlights_short_fields_only() {
    let (mut page, _, _) = controller(Scripted::Accept("t"), MemoryStorage::new());

    page.blur_username();
    page.set_username("ab");
    page.blur_username();
    page.set_password("secret1");
    page.blur_password();

    assert_eq!(
        page.view().invalid,
        vec![
            (Field::Username, false),
            (Field::Username, true),
            (Field::Password, false),
        ]
    );
}

#[tokio::test]
async fn test_typing_clears_error() {
    let (mut page, _, _) = controller(Scripted::Accept("t"), MemoryStorage::new());
    page.submit().await.unwrap_err();
    assert!(page.view().error.is_some());

    page.set_username("a");

    assert_eq!(page.view().error, None);
    assert_eq!(page.timers().deadline(TimerKind::HideError), None);
    assert_eq!(page.state(), LoginState::Idle);
}

#[tokio::test]
async fn test_password_visibility_toggle() {
    let (mut page, _, _) = controller(Scripted::Accept("t"), MemoryStorage::new());

    page.toggle_password_visibility();
    assert!(page.password_visible());
    assert!(page.view().password_visible);

    page.toggle_password_visibility();
    assert!(!page.view().password_visible);
}
