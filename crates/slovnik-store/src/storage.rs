use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slovnik_types::{ActionMode, DictionaryEntry};
use tokio::fs;

use crate::StoreError;

/// Full shape of the durable storage file: the dictionary under its own
/// key plus the transient selection-capture keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageRecord {
    pub dictionary: Vec<DictionaryEntry>,
    #[serde(rename = "selectedText", skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    #[serde(rename = "actionMode", skip_serializing_if = "Option::is_none")]
    pub action_mode: Option<ActionMode>,
}

/// JSON file holding one `StorageRecord`.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record; a missing file is an empty record, not an error.
    pub async fn load(&self) -> Result<StorageRecord, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StorageRecord::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the record via a temp file and rename, so a failed write
    /// leaves the previous file intact.
    pub async fn save(&self, record: &StorageRecord) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(record)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
