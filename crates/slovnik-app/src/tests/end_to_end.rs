use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use slovnik_config::Config;
use slovnik_store::Store;
use slovnik_translator::{TranslateError, Translator};
use slovnik_types::{ActionMode, ActionRequest, AppEvent, DictionaryEntry};

use crate::events::handle_event;
use crate::state::AppState;

struct StubTranslator(&'static str);

#[async_trait::async_trait]
impl Translator for StubTranslator {
    async fn translate(&self, _: &str, _: &str, _: &str) -> Result<String, TranslateError> {
        Ok(self.0.to_string())
    }
}

struct Harness {
    _dir: tempfile::TempDir,
    state: Arc<AppState>,
    store: Arc<Store>,
    ui_tx: AsyncSender<AppEvent>,
    ui_rx: AsyncReceiver<AppEvent>,
}

async fn harness() -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(
        Store::open(dir.path().join("slovnik.json")).await.unwrap(),
    );
    let state = Arc::new(AppState::new(Config::default()));
    let (ui_tx, ui_rx) = kanal::bounded_async(16);

    Harness {
        _dir: dir,
        state,
        store,
        ui_tx,
        ui_rx,
    }
}

impl Harness {
    async fn send(&self, request: ActionRequest, translator: Option<&dyn Translator>) {
        handle_event(
            self.state.clone(),
            self.store.clone(),
            translator,
            &self.ui_tx,
            AppEvent::Action(request),
        )
        .await
        .unwrap();
    }
}

#[tokio::test]
async fn context_menu_add_stores_the_translated_word() {
    let h = harness().await;
    let gateway = StubTranslator("Привет");

    h.send(
        ActionRequest::AddEntry {
            word: "hello".to_string(),
            translation: None,
        },
        Some(&gateway),
    )
    .await;

    assert_eq!(
        h.store.list().await,
        [DictionaryEntry::new("hello", "Привет")]
    );

    match h.ui_rx.recv().await.unwrap() {
        AppEvent::Notice(notice) => {
            assert!(notice.contains("hello"));
            assert!(notice.contains("Привет"));
        }
        other => panic!("expected a notice, got {other:?}"),
    }
}

#[tokio::test]
async fn blank_selection_is_silently_dropped() {
    let h = harness().await;
    let gateway = StubTranslator("Привет");

    h.send(
        ActionRequest::AddEntry {
            word: "   ".to_string(),
            translation: None,
        },
        Some(&gateway),
    )
    .await;

    assert!(h.store.list().await.is_empty());
    assert!(h.ui_rx.try_recv().unwrap().is_none());
}

#[tokio::test]
async fn popup_save_records_mode_and_date() {
    let h = harness().await;

    h.send(
        ActionRequest::SaveResult {
            word: "good morning".to_string(),
            result: "X".to_string(),
            mode: ActionMode::Explain,
        },
        None,
    )
    .await;

    let entries = h.store.list().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].word, "good morning");
    assert_eq!(entries[0].translation, "X");
    assert_eq!(entries[0].mode, Some(ActionMode::Explain));

    let date = entries[0].date.as_deref().expect("saved entry has a date");
    chrono::DateTime::parse_from_rfc3339(date).expect("date is RFC 3339");
}

#[tokio::test]
async fn popup_consumes_the_capture() {
    let h = harness().await;

    h.send(
        ActionRequest::Select {
            text: "hello".to_string(),
            mode: ActionMode::Translate,
        },
        None,
    )
    .await;

    // no gateway: the simulated processor answers with its canned translation
    h.send(ActionRequest::OpenPopup, None).await;
    match h.ui_rx.recv().await.unwrap() {
        AppEvent::ShowPopup(view) => {
            assert_eq!(view.original, "hello");
            assert_eq!(view.result, "Привет");
        }
        other => panic!("expected a popup, got {other:?}"),
    }

    // the capture was cleared on read, a reopen shows the empty view
    h.send(ActionRequest::OpenPopup, None).await;
    match h.ui_rx.recv().await.unwrap() {
        AppEvent::ShowPopup(view) => {
            assert_eq!(view.original, "No text selected");
        }
        other => panic!("expected a popup, got {other:?}"),
    }
}

#[tokio::test]
async fn stale_capture_is_reshown_when_clearing_is_off() {
    let h = harness().await;
    h.state.config.write().await.ui.clear_capture_on_read = false;

    h.send(
        ActionRequest::Select {
            text: "hello".to_string(),
            mode: ActionMode::Retell,
        },
        None,
    )
    .await;

    for _ in 0..2 {
        h.send(ActionRequest::OpenPopup, None).await;
        match h.ui_rx.recv().await.unwrap() {
            AppEvent::ShowPopup(view) => {
                assert_eq!(view.original, "hello");
                assert_eq!(view.mode, ActionMode::Retell);
            }
            other => panic!("expected a popup, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn open_dictionary_lists_entries_in_insertion_order() {
    let h = harness().await;

    h.store.upsert("hello", "Привет", None, None).await.unwrap();
    h.store.upsert("world", "мир", None, None).await.unwrap();

    h.send(ActionRequest::OpenDictionary, None).await;

    match h.ui_rx.recv().await.unwrap() {
        AppEvent::ShowOverlay(entries) => {
            let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
            assert_eq!(words, ["hello", "world"]);
        }
        other => panic!("expected the overlay, got {other:?}"),
    }
}

#[tokio::test]
async fn explain_mode_never_touches_the_gateway() {
    let h = harness().await;
    let gateway = StubTranslator("should not be used");

    h.send(
        ActionRequest::Select {
            text: "good morning".to_string(),
            mode: ActionMode::Explain,
        },
        Some(&gateway),
    )
    .await;
    h.send(ActionRequest::OpenPopup, Some(&gateway)).await;

    match h.ui_rx.recv().await.unwrap() {
        AppEvent::ShowPopup(view) => {
            assert_eq!(view.mode, ActionMode::Explain);
            assert!(view.result.starts_with("Explanation of:"));
        }
        other => panic!("expected a popup, got {other:?}"),
    }
}
