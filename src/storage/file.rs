use std::{io::ErrorKind, path::PathBuf};

use super::{KeyValueStore, StorageError};

/// Store keeping one `{key}.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_env() -> Self {
        Self::new(crate::config::session_dir())
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn get_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match async_fs::read_to_string(self.get_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        async_fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::IoError(e))?;
        async_fs::write(self.get_path(key), value)
            .await
            .map_err(|e| StorageError::IoError(e))
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match async_fs::remove_file(self.get_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }
}
