//! Session state management
//!
//! The session is created once at the application root from persisted
//! storage and handed down as context. Components read it; only three calls
//! change it:
//!
//! - [`SessionContext::set_session`] after login or signup
//! - [`SessionContext::update_user`] after a profile update
//! - [`SessionContext::clear`] on logout or when the backend rejects the token
//!
//! Every change is written through to storage. A storage failure is logged
//! and the in-memory session still changes, so the current tab keeps working.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use shared::dto::{Id, UserRecord};
use shared::normalize::{normalize_user, UserProfile};
use shared::role::Role;

use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// The persisted session: the user record the backend returned plus its token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: UserRecord,
    pub token: String,
}

impl StoredSession {
    pub fn profile(&self) -> UserProfile {
        normalize_user(&self.user)
    }
}

/// String key/value storage. `localStorage` in the browser, a map in tests.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// `window.localStorage`. Looked up on every call so the handle stays `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{e:?}")))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{e:?}")))
    }
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::Storage("memory storage poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}

/// Reads and writes the session under two storage keys.
#[derive(Clone)]
pub struct SessionPersistence {
    store: Arc<dyn KeyValueStore>,
    user_key: &'static str,
    token_key: &'static str,
}

impl SessionPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        Self {
            store,
            user_key: config.user_storage_key,
            token_key: config.token_storage_key,
        }
    }

    /// Load the stored session.
    ///
    /// A missing user or token means logged out. A user record that does not
    /// parse is removed so the next load starts clean.
    pub fn load(&self) -> Option<StoredSession> {
        let raw_user = match self.store.get(self.user_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("[session] could not read stored user: {}", e);
                return None;
            }
        };

        let user: UserRecord = match serde_json::from_str(&raw_user) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("[session] discarding unreadable stored user: {}", e);
                if let Err(e) = self.clear() {
                    log::warn!("[session] could not clear storage: {}", e);
                }
                return None;
            }
        };

        let token = match self.store.get(self.token_key) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return None,
            Err(e) => {
                log::warn!("[session] could not read stored token: {}", e);
                return None;
            }
        };

        Some(StoredSession { user, token })
    }

    pub fn save(&self, session: &StoredSession) -> Result<()> {
        let raw_user = serde_json::to_string(&session.user)?;
        self.store.set(self.user_key, &raw_user)?;
        self.store.set(self.token_key, &session.token)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(self.user_key)?;
        self.store.remove(self.token_key)
    }
}

/// Global session context
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<StoredSession>>,
    persistence: StoredValue<SessionPersistence>,
}

impl SessionContext {
    /// Create the context, populated from storage.
    pub fn new(persistence: SessionPersistence) -> Self {
        let initial = persistence.load();
        match &initial {
            Some(session) => log::info!("[session] restored session for user {}", session.user.id),
            None => log::info!("[session] no stored session"),
        }
        Self {
            session: RwSignal::new(initial),
            persistence: StoredValue::new(persistence),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().map(|s| s.profile().role))
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.session.with(|s| s.as_ref().map(StoredSession::profile))
    }

    pub fn user(&self) -> Option<UserRecord> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn user_id(&self) -> Option<Id> {
        self.session.with(|s| s.as_ref().map(|s| s.user.id.clone()))
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    /// Start a session after login or signup.
    pub fn set_session(&self, user: UserRecord, token: String) {
        let session = StoredSession { user, token };
        if let Err(e) = self.persistence.with_value(|p| p.save(&session)) {
            log::warn!("[session] could not persist session: {}", e);
        }
        log::info!("[session] logged in as user {}", session.user.id);
        self.session.set(Some(session));
    }

    /// Replace the user record of the current session (profile update).
    /// Does nothing when logged out.
    pub fn update_user(&self, user: UserRecord) {
        let Some(token) = self.token() else {
            log::warn!("[session] update_user called without a session");
            return;
        };
        let session = StoredSession { user, token };
        if let Err(e) = self.persistence.with_value(|p| p.save(&session)) {
            log::warn!("[session] could not persist profile update: {}", e);
        }
        self.session.set(Some(session));
    }

    /// End the session.
    pub fn clear(&self) {
        if let Err(e) = self.persistence.with_value(|p| p.clear()) {
            log::warn!("[session] could not clear stored session: {}", e);
        }
        log::info!("[session] logged out");
        self.session.set(None);
    }
}

pub fn provide_session_context(persistence: SessionPersistence) -> SessionContext {
    let context = SessionContext::new(persistence);
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persistence(storage: &MemoryStorage) -> SessionPersistence {
        SessionPersistence::new(Arc::new(storage.clone()), &AppConfig::default())
    }

    fn farmer() -> UserRecord {
        UserRecord {
            id: Id::from(12),
            full_name: Some("Wanjiru Kamau".into()),
            role: Some("farmer".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_storage_is_logged_out() {
        let storage = MemoryStorage::new();
        assert_eq!(persistence(&storage).load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let session = StoredSession { user: farmer(), token: "tok-1".into() };
        persistence(&storage).save(&session).unwrap();

        let loaded = persistence(&storage).load().unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.profile().role, Role::Farmer);
    }

    #[test]
    fn test_user_without_token_is_logged_out() {
        let storage = MemoryStorage::new();
        storage
            .set(crate::config::USER_STORAGE_KEY, &serde_json::to_string(&farmer()).unwrap())
            .unwrap();
        assert_eq!(persistence(&storage).load(), None);
    }

    #[test]
    fn test_corrupt_user_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(crate::config::USER_STORAGE_KEY, "{not json").unwrap();
        storage.set(crate::config::TOKEN_STORAGE_KEY, "tok").unwrap();

        assert_eq!(persistence(&storage).load(), None);
        assert_eq!(storage.get(crate::config::USER_STORAGE_KEY).unwrap(), None);
        assert_eq!(storage.get(crate::config::TOKEN_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_context_lifecycle() {
        let owner = Owner::new();
        owner.with(|| {
            let storage = MemoryStorage::new();
            let ctx = SessionContext::new(persistence(&storage));
            assert!(!ctx.is_authenticated());
            assert_eq!(ctx.role(), None);

            ctx.set_session(farmer(), "tok-1".into());
            assert!(ctx.is_authenticated());
            assert_eq!(ctx.role(), Some(Role::Farmer));
            assert!(persistence(&storage).load().is_some());

            let mut renamed = farmer();
            renamed.full_name = Some("Wanjiru W. Kamau".into());
            ctx.update_user(renamed);
            assert_eq!(ctx.profile().unwrap().display_name, "Wanjiru W. Kamau");
            assert_eq!(ctx.token().as_deref(), Some("tok-1"));
            assert_eq!(
                persistence(&storage).load().unwrap().user.full_name.as_deref(),
                Some("Wanjiru W. Kamau")
            );

            ctx.clear();
            assert!(!ctx.is_authenticated());
            assert_eq!(persistence(&storage).load(), None);

            // a fresh context sees the cleared storage
            assert!(!SessionContext::new(persistence(&storage)).is_authenticated());
        });
    }

    #[test]
    fn test_update_user_without_session_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let storage = MemoryStorage::new();
            let ctx = SessionContext::new(persistence(&storage));
            ctx.update_user(farmer());
            assert!(!ctx.is_authenticated());
            assert_eq!(persistence(&storage).load(), None);
        });
    }
}
