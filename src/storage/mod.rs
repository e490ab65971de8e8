//! Session persistence on top of an injected key-value store.
//!
//! Each role keeps at most one session record under a fixed key. The record
//! is whatever the login endpoint returned, stored as JSON and trusted as is
//! on the way back: there is no expiry and no shape check.

use std::{fmt, future::Future, io::Error};

use serde::{Serialize, de::DeserializeOwned};

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

pub const ADMIN_SESSION_KEY: &str = "admin";
pub const STUDENT_SESSION_KEY: &str = "student";

#[derive(Debug)]
pub enum StorageError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "storage io error: {}", e),
            StorageError::SerdeError(e) => write!(f, "stored session is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::IoError(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerdeError(err)
    }
}

/// String-keyed persistence. Writes overwrite, removing a missing key is a
/// no-op.
pub trait KeyValueStore {
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn remove_item(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// One role's session slot.
#[derive(Debug, Clone)]
pub struct SessionStorage<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> SessionStorage<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn admin(store: S) -> Self {
        Self::new(store, ADMIN_SESSION_KEY)
    }

    pub fn student(store: S) -> Self {
        Self::new(store, STUDENT_SESSION_KEY)
    }

    pub fn key(&self) -> &str {
        self.key
    }

    pub async fn set<T: Serialize + ?Sized>(&self, session: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)?;
        self.store.set_item(self.key, &json).await
    }

    /// `Ok(None)` when nothing, an empty value or a JSON `null` is stored.
    /// A value that does not parse as `T` is an error for the caller to
    /// handle.
    pub async fn get<T: DeserializeOwned>(&self) -> Result<Option<T>, StorageError> {
        match self.store.get_item(self.key).await? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => Ok(serde_json::from_str::<Option<T>>(&raw)?),
            None => Ok(None),
        }
    }

    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove_item(self.key).await
    }

    pub async fn is_logged_in(&self) -> Result<bool, StorageError> {
        Ok(self.get::<serde_json::Value>().await?.is_some())
    }
}
