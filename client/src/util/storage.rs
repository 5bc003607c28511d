//! Browser storage adapters and session-record persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the session record into `localStorage` when the user
//! asks to be remembered and into `sessionStorage` otherwise. `SessionStores`
//! keeps exactly one of the two populated.
//!
//! TRADE-OFFS
//! ==========
//! Clear-then-write spans separate storage calls; a failure between them can
//! leave neither store populated. There is no transaction to roll back to.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::LoginError;
use crate::net::types::SessionRecord;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "user_id";
pub const USERNAME_KEY: &str = "username";

/// Minimal string key/value store with the `Storage` web API semantics.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`LoginError::Storage`] if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, LoginError>;

    /// # Errors
    ///
    /// Returns [`LoginError::Storage`] if the write is rejected (quota, privacy mode).
    fn set_item(&self, key: &str, value: &str) -> Result<(), LoginError>;

    /// Remove every key.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Storage`] if the store cannot be cleared.
    fn clear(&self) -> Result<(), LoginError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StorageArea {
    Local,
    Session,
}

/// `window.localStorage` or `window.sessionStorage`.
///
/// Resolved on every call so the adapter itself holds no JS handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    /// Durable storage that survives browser restarts.
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    /// Storage scoped to the current tab session.
    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    #[cfg(feature = "hydrate")]
    fn resolve(self) -> Result<web_sys::Storage, LoginError> {
        let window = web_sys::window().ok_or(LoginError::Unavailable)?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage
            .map_err(|e| LoginError::Storage(format!("{e:?}")))?
            .ok_or_else(|| LoginError::Storage(format!("{:?} storage disabled", self.area)))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, LoginError> {
        #[cfg(feature = "hydrate")]
        {
            self.resolve()?
                .get_item(key)
                .map_err(|e| LoginError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(LoginError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), LoginError> {
        #[cfg(feature = "hydrate")]
        {
            self.resolve()?
                .set_item(key, value)
                .map_err(|e| LoginError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(LoginError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), LoginError> {
        #[cfg(feature = "hydrate")]
        {
            self.resolve()?
                .clear()
                .map_err(|e| LoginError::Storage(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(LoginError::Unavailable)
        }
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, LoginError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), LoginError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), LoginError> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

/// The durable/session-scoped storage pair that holds the session record.
#[derive(Clone, Debug)]
pub struct SessionStores<S> {
    durable: S,
    session: S,
}

impl SessionStores<BrowserStorage> {
    /// `localStorage` as durable, `sessionStorage` as session-scoped.
    pub fn browser() -> Self {
        Self::new(BrowserStorage::local(), BrowserStorage::session())
    }
}

impl<S: KeyValueStore> SessionStores<S> {
    pub fn new(durable: S, session: S) -> Self {
        Self { durable, session }
    }

    pub fn durable(&self) -> &S {
        &self.durable
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Write `record` into the tier picked by `remember`, clearing the other tier first.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure; earlier steps are not undone.
    pub fn persist(&self, record: &SessionRecord, remember: bool) -> Result<(), LoginError> {
        let (target, stale) = if remember {
            (&self.durable, &self.session)
        } else {
            (&self.session, &self.durable)
        };
        stale.clear()?;
        target.set_item(TOKEN_KEY, &record.token)?;
        target.set_item(USER_ID_KEY, &record.user_id)?;
        target.set_item(USERNAME_KEY, &record.username)?;
        Ok(())
    }

    /// Read the stored record, preferring the durable tier.
    ///
    /// A tier only counts if it holds all three keys.
    ///
    /// # Errors
    ///
    /// Returns a storage failure from either tier.
    pub fn load(&self) -> Result<Option<SessionRecord>, LoginError> {
        if let Some(record) = read_record(&self.durable)? {
            return Ok(Some(record));
        }
        read_record(&self.session)
    }
}

fn read_record<S: KeyValueStore>(store: &S) -> Result<Option<SessionRecord>, LoginError> {
    let (Some(token), Some(user_id), Some(username)) = (
        store.get_item(TOKEN_KEY)?,
        store.get_item(USER_ID_KEY)?,
        store.get_item(USERNAME_KEY)?,
    ) else {
        return Ok(None);
    };
    Ok(Some(SessionRecord { token, user_id, username }))
}
