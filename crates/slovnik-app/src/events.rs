use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use slovnik_store::Store;
use slovnik_translator::{GoogleTranslator, Translator};
use slovnik_types::{ActionMode, ActionRequest, AppEvent};

use crate::state::AppState;

pub mod add_entry;
pub mod open_popup;
pub mod save_result;

use add_entry::handle_add_entry;
use open_popup::handle_open_popup;
use save_result::handle_save_result;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    store: Arc<Store>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Initialize the gateway when enabled; otherwise every mode runs through
    // the simulated processor
    let translator = {
        let config = state.config.read().await;
        if config.translator.enabled {
            Some(GoogleTranslator::new(config.translator.api_url.clone()))
        } else {
            tracing::warn!("translator disabled, using simulated processor");
            None
        }
    };

    tracing::info!("event loop started, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        handle_event(
            state.clone(),
            store.clone(),
            translator.as_ref().map(|t| t as &dyn Translator),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }
}

pub async fn handle_event(
    state: Arc<AppState>,
    store: Arc<Store>,
    translator: Option<&dyn Translator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Action(ActionRequest::OpenDictionary) => {
            let entries = store.list().await;
            app_to_ui_tx.send(AppEvent::ShowOverlay(entries)).await?;
        }
        AppEvent::Action(ActionRequest::AddEntry { word, translation }) => {
            handle_add_entry(state, &store, translator, app_to_ui_tx, word, translation).await?;
        }
        AppEvent::Action(ActionRequest::Select { text, mode }) => {
            if let Err(e) = store.set_capture(&text, mode).await {
                tracing::error!("failed to record selection: {e}");
            }
        }
        AppEvent::Action(ActionRequest::OpenPopup) => {
            handle_open_popup(state, &store, translator, app_to_ui_tx).await?;
        }
        AppEvent::Action(ActionRequest::SaveResult { word, result, mode }) => {
            handle_save_result(&store, app_to_ui_tx, &word, &result, mode).await?;
        }
        AppEvent::Action(ActionRequest::CopyResult { text }) => {
            let copied =
                tokio::task::spawn_blocking(move || slovnik_io::clipboard::copy_text(&text)).await?;
            match copied {
                Ok(()) => {
                    app_to_ui_tx
                        .send(AppEvent::Notice("Copied to clipboard!".to_string()))
                        .await?;
                }
                Err(e) => tracing::warn!("clipboard copy failed: {e}"),
            }
        }
        AppEvent::Action(ActionRequest::Speak { text }) => {
            let command = {
                let config = state.config.read().await;
                config.ui.speech_command.clone()
            };
            // best effort, speech is a collaborator
            if let Err(e) = tokio::process::Command::new(&command).arg(&text).spawn() {
                tracing::warn!("speech command `{command}` failed: {e}");
            }
        }
        AppEvent::SelectionCaptured { text, source } => {
            tracing::debug!(?source, chars = text.len(), "selection captured");
            if let Err(e) = store.set_capture(&text, ActionMode::default()).await {
                tracing::error!("failed to record selection: {e}");
            }
        }
        AppEvent::ShowPopup(_)
        | AppEvent::ShowOverlay(_)
        | AppEvent::Notice(_)
        | AppEvent::UiEvent(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
