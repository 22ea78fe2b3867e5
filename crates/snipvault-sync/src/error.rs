use thiserror::Error;

use snipvault_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The batch transfer was rejected or never reached the server. No
    /// partial effect: the remote store committed nothing and the local
    /// store is untouched, so the next detected login edge retries.
    #[error("batch migration failed: {0}")]
    Migration(#[source] StorageError),

    /// The remote commit succeeded but the local slot could not be
    /// cleared. The identity marker is still advanced so the migration
    /// does not re-run and duplicate the records.
    #[error("failed to clear local store after migration: {0}")]
    ClearLocal(#[source] StorageError),
}
