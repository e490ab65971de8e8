use std::{
    collections::HashMap,
    future::Future,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use super::ExportError;

/// Handle to a payload staged in a [`DownloadTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StagedId(pub u64);

/// Where exported files end up.
///
/// A payload is first staged (the target may hold it in memory or create a
/// temporary object for it), then saved under a file name, then released.
/// `release` is called exactly once per staged payload.
pub trait DownloadTarget {
    fn stage(&self, payload: Vec<u8>) -> Result<StagedId, ExportError>;

    fn save(
        &self,
        id: StagedId,
        file_name: &str,
    ) -> impl Future<Output = Result<(), ExportError>> + Send;

    fn release(&self, id: StagedId);
}

/// Owns a staged payload and releases it on drop.
pub struct StagedDownload<'a, D: DownloadTarget> {
    target: &'a D,
    id: StagedId,
}

impl<'a, D: DownloadTarget> StagedDownload<'a, D> {
    pub fn stage(target: &'a D, payload: Vec<u8>) -> Result<Self, ExportError> {
        let id = target.stage(payload)?;
        Ok(Self { target, id })
    }

    pub async fn save(&self, file_name: &str) -> Result<(), ExportError> {
        self.target.save(self.id, file_name).await
    }
}

impl<D: DownloadTarget> Drop for StagedDownload<'_, D> {
    fn drop(&mut self) {
        self.target.release(self.id);
    }
}

/// Saves exports as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
    staged: Arc<Mutex<HashMap<u64, Vec<u8>>>>,
    next_id: Arc<AtomicU64>,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            staged: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_env() -> Self {
        Self::new(crate::config::download_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of payloads staged and not yet released.
    pub fn staged_count(&self) -> usize {
        self.lock().len()
    }

    /// Joins only the final component of `file_name` onto the directory so a
    /// server supplied name cannot escape it.
    pub fn path_for(&self, file_name: &str) -> Result<PathBuf, ExportError> {
        let name = Path::new(file_name).file_name().ok_or_else(|| {
            ExportError::CriticalError(format!("invalid export file name: {file_name}"))
        })?;
        Ok(self.dir.join(name))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, Vec<u8>>> {
        self.staged.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DownloadTarget for DirectoryTarget {
    fn stage(&self, payload: Vec<u8>) -> Result<StagedId, ExportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock().insert(id, payload);
        Ok(StagedId(id))
    }

    async fn save(&self, id: StagedId, file_name: &str) -> Result<(), ExportError> {
        let path = self.path_for(file_name)?;
        let payload = self.lock().get(&id.0).cloned().ok_or_else(|| {
            ExportError::CriticalError(format!("no staged export with id {}", id.0))
        })?;

        async_fs::create_dir_all(&self.dir).await?;
        async_fs::write(&path, payload).await?;
        Ok(())
    }

    fn release(&self, id: StagedId) {
        self.lock().remove(&id.0);
    }
}
