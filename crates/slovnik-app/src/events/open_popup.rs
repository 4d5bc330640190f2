use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use slovnik_store::Store;
use slovnik_translator::{translate_or_fallback, SimulatedProcessor, Translator};
use slovnik_types::{ActionMode, AppEvent, PopupView};

use crate::state::AppState;

/// Popup open: consume the current selection capture and produce the view.
/// Translate mode goes through the gateway when one is configured; explain
/// and retell always run the simulated processor.
pub async fn handle_open_popup(
    state: Arc<AppState>,
    store: &Store,
    translator: Option<&dyn Translator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (clear, from, to, timeout) = {
        let config = state.config.read().await;
        (
            config.ui.clear_capture_on_read,
            config.translator.from_lang.clone(),
            config.translator.to_lang.clone(),
            Duration::from_secs(config.translator.timeout_seconds),
        )
    };

    let capture = match store.take_capture(clear).await {
        Ok(capture) => capture,
        Err(e) => {
            tracing::error!("failed to read selection capture: {e}");
            None
        }
    };

    let Some((text, mode)) = capture else {
        app_to_ui_tx
            .send(AppEvent::ShowPopup(PopupView {
                mode: ActionMode::default(),
                original: "No text selected".to_string(),
                result: "Please select text on the page and use the context menu".to_string(),
            }))
            .await?;
        return Ok(());
    };

    let result = match (mode, translator) {
        (ActionMode::Translate, Some(gateway)) => {
            translate_or_fallback(gateway, &text, &from, &to, timeout).await
        }
        _ => SimulatedProcessor.process(&text, mode),
    };

    app_to_ui_tx
        .send(AppEvent::ShowPopup(PopupView {
            mode,
            original: text,
            result,
        }))
        .await?;

    Ok(())
}
