use crate::models::ShortLinkRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No record exists for the code. Malformed codes land here too.
    #[error("short code not found")]
    NotFound,
    #[error("no unused short code found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// The code -> record table.
///
/// Callers only ever receive snapshots; all mutation goes through these
/// operations so implementations can keep them atomic.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Assign a fresh, unused short code to `original_url` and return it.
    ///
    /// `original_url` must already be validated.
    async fn create(&self, original_url: &str) -> StorageResult<String>;

    /// Count one access to `short_code` and return the updated record
    async fn resolve(&self, short_code: &str) -> StorageResult<ShortLinkRecord>;

    /// Read a record without counting an access
    async fn stats(&self, short_code: &str) -> StorageResult<ShortLinkRecord>;

    /// Number of stored links
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
