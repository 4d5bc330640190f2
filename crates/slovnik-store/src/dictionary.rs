use std::path::Path;

use slovnik_types::{ActionMode, DictionaryEntry};
use tokio::sync::Mutex;

use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::storage::{Storage, StorageRecord};
use crate::StoreError;

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    /// Blank word after trimming; nothing was written.
    Skipped,
}

/// The personal dictionary plus the transient selection capture, backed by
/// one storage file.
///
/// All writers share one handle; the mutex serializes the read-modify-write
/// cycle so two handlers cannot commit from stale snapshots of each other.
/// Mutations are applied to a copy and persisted before the in-memory state
/// is replaced, so a failed write leaves the prior state observable.
pub struct Store {
    storage: Storage,
    state: Mutex<StorageRecord>,
}

impl Store {
    /// Open the store, loading whatever the storage file already holds.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage = Storage::new(path);
        let state = storage.load().await?;

        tracing::debug!(
            entries = state.dictionary.len(),
            path = %storage.path().display(),
            "dictionary store opened"
        );

        Ok(Self {
            storage,
            state: Mutex::new(state),
        })
    }

    /// Insert `word` or overwrite its existing entry, last write wins.
    ///
    /// The word is trimmed first; a word that is blank after trimming is
    /// silently skipped. An update keeps the entry at its original position,
    /// an insert appends at the end.
    pub async fn upsert(
        &self,
        word: &str,
        translation: &str,
        mode: Option<ActionMode>,
        date: Option<String>,
    ) -> Result<UpsertOutcome, StoreError> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(UpsertOutcome::Skipped);
        }

        let mut state = self.state.lock().await;
        let mut next = state.clone();

        let outcome = match next.dictionary.iter_mut().find(|e| e.word == word) {
            Some(entry) => {
                entry.translation = translation.to_string();
                entry.mode = mode;
                entry.date = date;
                UpsertOutcome::Updated
            }
            None => {
                next.dictionary.push(DictionaryEntry {
                    word: word.to_string(),
                    translation: translation.to_string(),
                    mode,
                    date,
                });
                UpsertOutcome::Inserted
            }
        };

        self.storage.save(&next).await?;
        *state = next;

        Ok(outcome)
    }

    /// Full dictionary in insertion order. Empty vec when nothing is stored.
    pub async fn list(&self) -> Vec<DictionaryEntry> {
        self.state.lock().await.dictionary.clone()
    }

    /// Overwrite the selection capture with a new selection.
    pub async fn set_capture(
        &self,
        text: &str,
        mode: ActionMode,
    ) -> Result<(), StoreError> {
        let text = DefaultPreprocessor.process(text);
        if text.is_empty() {
            return Ok(());
        }

        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.selected_text = Some(text);
        next.action_mode = Some(mode);

        self.storage.save(&next).await?;
        *state = next;

        Ok(())
    }

    /// Read the current selection capture, clearing it when `clear` is set.
    pub async fn take_capture(
        &self,
        clear: bool,
    ) -> Result<Option<(String, ActionMode)>, StoreError> {
        let mut state = self.state.lock().await;

        let Some(text) = state.selected_text.clone() else {
            return Ok(None);
        };
        let mode = state.action_mode.unwrap_or_default();

        if clear {
            let mut next = state.clone();
            next.selected_text = None;
            next.action_mode = None;

            self.storage.save(&next).await?;
            *state = next;
        }

        Ok(Some((text, mode)))
    }
}
