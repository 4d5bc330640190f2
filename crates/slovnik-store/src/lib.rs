pub mod dictionary;
pub mod preprocess;
pub mod storage;

pub use dictionary::{Store, UpsertOutcome};
pub use storage::{Storage, StorageRecord};

/// Persistence-layer failure. A failed write never partially applies;
/// the store's prior state stays observable.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage record is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}
