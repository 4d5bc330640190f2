use serde::{Deserialize, Serialize};

/// Which operation produced a result or entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionMode {
    #[default]
    Translate,
    Explain,
    Retell,
}

impl ActionMode {
    /// Title shown in the popup header for this mode
    pub fn title(&self) -> &'static str {
        match self {
            ActionMode::Translate => "Translate",
            ActionMode::Explain => "Explanation",
            ActionMode::Retell => "Retelling",
        }
    }
}

/// One persisted dictionary record, keyed by `word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ActionMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            mode: None,
            date: None,
        }
    }
}

/// Command received over the message bus.
///
/// Wire format is a JSON object tagged by `action`, e.g.
/// `{"action":"addEntry","word":"hello"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ActionRequest {
    OpenDictionary,
    #[serde(rename_all = "camelCase")]
    AddEntry {
        word: String,
        #[serde(default)]
        translation: Option<String>,
    },
    Select {
        text: String,
        #[serde(default)]
        mode: ActionMode,
    },
    OpenPopup,
    #[serde(rename_all = "camelCase")]
    SaveResult {
        word: String,
        result: String,
        mode: ActionMode,
    },
    CopyResult {
        text: String,
    },
    Speak {
        text: String,
    },
}

/// Where captured text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    Clipboard,
    Websocket,
    Manual,
}

/// Rendered state of the popup window.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub mode: ActionMode,
    pub original: String,
    pub result: String,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Show,
    Hide,
    Close,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Action(ActionRequest),
    SelectionCaptured {
        text: String,
        source: TextSource,
    },
    ShowPopup(PopupView),
    ShowOverlay(Vec<DictionaryEntry>),
    Notice(String),
    UiEvent(UiEvent),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_requests_decode_from_tagged_json() {
        let open: ActionRequest = serde_json::from_str(r#"{"action":"openDictionary"}"#).unwrap();
        assert_eq!(open, ActionRequest::OpenDictionary);

        let add: ActionRequest =
            serde_json::from_str(r#"{"action":"addEntry","word":"hello"}"#).unwrap();
        assert_eq!(
            add,
            ActionRequest::AddEntry {
                word: "hello".to_string(),
                translation: None,
            }
        );

        let select: ActionRequest =
            serde_json::from_str(r#"{"action":"select","text":"hi","mode":"explain"}"#).unwrap();
        assert_eq!(
            select,
            ActionRequest::Select {
                text: "hi".to_string(),
                mode: ActionMode::Explain,
            }
        );
    }

    #[test]
    fn select_mode_defaults_to_translate() {
        let select: ActionRequest =
            serde_json::from_str(r#"{"action":"select","text":"hi"}"#).unwrap();
        assert_eq!(
            select,
            ActionRequest::Select {
                text: "hi".to_string(),
                mode: ActionMode::Translate,
            }
        );
    }

    #[test]
    fn entry_omits_absent_mode_and_date() {
        let entry = DictionaryEntry::new("hello", "Привет");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"word": "hello", "translation": "Привет"})
        );
    }
}
