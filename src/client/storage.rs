//! Browser-style key/value storage.

use std::collections::HashMap;

/// Remembered username, durable scope.
pub const REMEMBERED_USER_KEY: &str = "adminUser";
/// Milliseconds since the Unix epoch of the last remembered login, durable scope.
pub const LOGIN_TIMESTAMP_KEY: &str = "loginTimestamp";
/// Session token, tab scope.
pub const TOKEN_KEY: &str = "adminToken";
/// Selected page language, durable scope.
pub const LANGUAGE_KEY: &str = "adminLanguage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageScope {
    /// Survives browser restarts.
    Durable,
    /// Lives as long as the tab.
    Tab,
}

pub trait ClientStorage {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String>;
    fn set(&mut self, scope: StorageScope, key: &str, value: &str);
    fn remove(&mut self, scope: StorageScope, key: &str);
}

/// Storage held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    durable: HashMap<String, String>,
    tab: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops tab-scoped entries, as closing the tab would.
    pub fn close_tab(&mut self) {
        self.tab.clear();
    }

    fn scope(&self, scope: StorageScope) -> &HashMap<String, String> {
        match scope {
            StorageScope::Durable => &self.durable,
            StorageScope::Tab => &self.tab,
        }
    }

    fn scope_mut(&mut self, scope: StorageScope) -> &mut HashMap<String, String> {
        match scope {
            StorageScope::Durable => &mut self.durable,
            StorageScope::Tab => &mut self.tab,
        }
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, scope: StorageScope, key: &str) -> Option<String> {
        self.scope(scope).get(key).cloned()
    }

    fn set(&mut self, scope: StorageScope, key: &str, value: &str) {
        self.scope_mut(scope).insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, scope: StorageScope, key: &str) {
        self.scope_mut(scope).remove(key);
    }
}
