use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use slovnik_types::{ActionRequest, AppEvent, TextSource};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Input sources: the WebSocket command bus and the clipboard watcher.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (listen_to_ws, ws_url, delta_time) = {
        let config = state.config.read().await;
        (
            config.listen_to_ws,
            config.ws_url.clone(),
            config.delta_time,
        )
    };

    if listen_to_ws {
        tracing::info!("connecting to command bus at {ws_url}");

        let tx = event_tx.clone();
        slovnik_io::ws::start_ws_listener(&ws_url, move |frame| {
            // frames are JSON-tagged action requests; bad frames are dropped
            let request: ActionRequest = match serde_json::from_str(&frame) {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!("dropping malformed command frame: {e}");
                    return;
                }
            };

            let tx = tx.clone();
            tokio::spawn(async move {
                if let Err(e) = tx.send(AppEvent::Action(request)).await {
                    tracing::error!("failed to forward command: {e}");
                }
            });
        })
        .await?;
    }

    // Clipboard watcher
    tracing::info!("starting clipboard watcher");

    let tx = event_tx.clone();
    tokio::select! {
        result = slovnik_io::clipboard::watch_clipboard(
            Duration::from_millis(delta_time),
            move |text| {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let event = AppEvent::SelectionCaptured {
                        text,
                        source: TextSource::Clipboard,
                    };
                    if let Err(e) = tx.send(event).await {
                        tracing::error!("failed to forward clipboard text: {e}");
                    }
                });
            },
        ) => {
            if let Err(e) = result {
                tracing::error!("clipboard watcher error: {e}");
            }
        }
        _ = cancel.cancelled() => {
            tracing::info!("clipboard watcher stopping");
        }
    }

    Ok(())
}
