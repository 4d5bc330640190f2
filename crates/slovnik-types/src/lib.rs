pub mod types;

pub use types::{
    ActionMode, ActionRequest, AppEvent, DictionaryEntry, PopupView, TextSource, UiEvent,
};
