//! 会话存储
//!
//! 会话在启动时从持久化存储中恢复，登录时写入，注销时清除。
//! 是否已登录只由 token 决定。

use crate::error::WorkflowError;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const EMAIL_KEY: &str = "email";

/// 持久化键值存储（浏览器中为 LocalStorage）
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), WorkflowError>;
    fn remove(&self, key: &str);
}

/// 用户身份，仅用于展示
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identity {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// 展示名称：优先用户名，没有时使用邮箱
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.username.as_deref()).or_else(|| non_empty(self.email.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// 会话存储
///
/// 内存中的会话与持久化存储保持一致，写入采用后写覆盖。
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// 从持久化存储恢复会话
    pub fn hydrate(storage: S) -> Self {
        let session = non_empty(storage.get(TOKEN_KEY).as_deref())
            .map(str::to_string)
            .map(|token| Session {
                token,
                identity: Identity {
                    username: storage.get(USERNAME_KEY),
                    email: storage.get(EMAIL_KEY),
                },
            });
        tracing::debug!(authenticated = session.is_some(), "session hydrated");
        Self { storage, session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    pub fn display_name(&self) -> Option<String> {
        self.identity()
            .and_then(Identity::display_name)
            .map(str::to_string)
    }

    /// 登录：持久化身份信息与 token
    ///
    /// token 最后写入；任何一步失败都会清除已写入的键，会话变为未登录。
    pub fn login(&mut self, token: String, identity: Identity) -> Result<(), WorkflowError> {
        if let Err(err) = self.persist(&token, &identity) {
            tracing::warn!(error = %err, "session write failed, rolling back");
            self.clear();
            return Err(err);
        }

        tracing::info!(user = identity.display_name().unwrap_or("-"), "logged in");
        self.session = Some(Session { token, identity });
        Ok(())
    }

    /// 注销：清除 token 与全部身份字段
    pub fn logout(&mut self) {
        self.clear();
        tracing::info!("logged out");
    }

    fn clear(&mut self) {
        for key in [TOKEN_KEY, USERNAME_KEY, EMAIL_KEY] {
            self.storage.remove(key);
        }
        self.session = None;
    }

    fn persist(&self, token: &str, identity: &Identity) -> Result<(), WorkflowError> {
        self.write_optional(USERNAME_KEY, identity.username.as_deref())?;
        self.write_optional(EMAIL_KEY, identity.email.as_deref())?;
        self.storage.set(TOKEN_KEY, token)
    }

    fn write_optional(&self, key: &str, value: Option<&str>) -> Result<(), WorkflowError> {
        match value {
            Some(value) => self.storage.set(key, value),
            None => {
                self.storage.remove(key);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// 内存存储，克隆后共享同一份数据
    #[derive(Clone, Default)]
    pub struct MockStorage {
        data: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<Cell<usize>>,
        /// 从第 N 次写入起失败（从 1 计数）
        fail_from: Rc<Cell<Option<usize>>>,
    }

    impl MockStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(entries: &[(&str, &str)]) -> Self {
            let storage = Self::new();
            for (key, value) in entries {
                storage
                    .data
                    .borrow_mut()
                    .insert(key.to_string(), value.to_string());
            }
            storage
        }

        pub fn fail_writes(&self) {
            self.fail_from(1);
        }

        pub fn fail_from(&self, nth: usize) {
            self.fail_from.set(Some(nth));
        }

        pub fn entry_count(&self) -> usize {
            self.data.borrow().len()
        }
    }

    impl SessionStorage for MockStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.data.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), WorkflowError> {
            let attempt = self.writes.get() + 1;
            self.writes.set(attempt);
            if self.fail_from.get().is_some_and(|nth| attempt >= nth) {
                return Err(WorkflowError::storage("quota exceeded"));
            }
            self.data
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.data.borrow_mut().remove(key);
        }
    }

    fn identity(username: Option<&str>, email: Option<&str>) -> Identity {
        Identity {
            username: username.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_hydrate_without_token_is_unauthenticated() {
        let store = SessionStore::hydrate(MockStorage::with(&[(USERNAME_KEY, "alice")]));
        assert!(!store.is_authenticated());
        assert_eq!(store.display_name(), None);
    }

    #[test]
    fn test_hydrate_ignores_blank_token() {
        let store = SessionStore::hydrate(MockStorage::with(&[(TOKEN_KEY, "  ")]));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_hydrate_restores_session() {
        let store = SessionStore::hydrate(MockStorage::with(&[
            (TOKEN_KEY, "jwt"),
            (USERNAME_KEY, "alice"),
        ]));
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("jwt"));
        assert_eq!(store.display_name().as_deref(), Some("alice"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(
            identity(None, Some("bob@example.com")).display_name(),
            Some("bob@example.com")
        );
        assert_eq!(
            identity(Some(""), Some("bob@example.com")).display_name(),
            Some("bob@example.com")
        );
        assert_eq!(identity(None, None).display_name(), None);
    }

    #[test]
    fn test_login_persists_token_and_identity() {
        let storage = MockStorage::new();
        let mut store = SessionStore::hydrate(storage.clone());

        store
            .login("jwt".to_string(), identity(Some("alice"), Some("a@x.io")))
            .unwrap();

        assert!(store.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt"));
        assert_eq!(storage.get(USERNAME_KEY).as_deref(), Some("alice"));
        assert_eq!(storage.get(EMAIL_KEY).as_deref(), Some("a@x.io"));

        let restored = SessionStore::hydrate(storage);
        assert_eq!(restored.session(), store.session());
    }

    #[test]
    fn test_login_removes_stale_identity_fields() {
        let storage = MockStorage::with(&[(EMAIL_KEY, "old@x.io")]);
        let mut store = SessionStore::hydrate(storage.clone());

        store
            .login("jwt".to_string(), identity(Some("alice"), None))
            .unwrap();
        assert_eq!(storage.get(EMAIL_KEY), None);
    }

    #[test]
    fn test_login_failure_keeps_unauthenticated() {
        let storage = MockStorage::new();
        storage.fail_writes();
        let mut store = SessionStore::hydrate(storage);

        let err = store
            .login("jwt".to_string(), identity(Some("alice"), None))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Storage(_)));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_partial_login_write_leaves_nothing_behind() {
        for nth in 1..=3 {
            let storage = MockStorage::with(&[(EMAIL_KEY, "old@x.io")]);
            storage.fail_from(nth);
            let mut store = SessionStore::hydrate(storage.clone());

            let result = store.login("jwt".to_string(), identity(Some("alice"), Some("a@x.io")));

            assert!(matches!(result, Err(WorkflowError::Storage(_))), "write {nth}");
            assert!(!store.is_authenticated());
            assert_eq!(storage.entry_count(), 0, "write {nth}");
            let restored = SessionStore::hydrate(storage);
            assert!(!restored.is_authenticated(), "write {nth}");
        }
    }

    #[test]
    fn test_failed_relogin_drops_previous_session() {
        let storage = MockStorage::with(&[(TOKEN_KEY, "old"), (USERNAME_KEY, "bob")]);
        let mut store = SessionStore::hydrate(storage.clone());
        assert!(store.is_authenticated());

        storage.fail_from(2);
        assert!(store
            .login("jwt".to_string(), identity(Some("alice"), None))
            .is_err());

        assert!(!store.is_authenticated());
        assert!(!SessionStore::hydrate(storage).is_authenticated());
    }

    #[test]
    fn test_logout_clears_everything() {
        let storage = MockStorage::with(&[
            (TOKEN_KEY, "jwt"),
            (USERNAME_KEY, "alice"),
            (EMAIL_KEY, "a@x.io"),
        ]);
        let mut store = SessionStore::hydrate(storage.clone());
        assert!(store.is_authenticated());

        store.logout();

        assert!(!store.is_authenticated());
        assert_eq!(store.identity(), None);
        assert_eq!(storage.entry_count(), 0);
        assert!(!SessionStore::hydrate(storage).is_authenticated());
    }
}
