use kanal::AsyncReceiver;
use slovnik_types::{AppEvent, UiEvent};

pub mod render;

pub use render::{render_overlay, render_popup, EMPTY_DICTIONARY};

/// Consume app-to-ui events and draw them. The overlay and popup are
/// textual panels written to stdout.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        match event {
            AppEvent::ShowOverlay(entries) => {
                tracing::debug!(entries = entries.len(), "rendering overlay");
                print!("{}", render_overlay(&entries));
            }
            AppEvent::ShowPopup(view) => {
                tracing::debug!(mode = ?view.mode, "rendering popup");
                print!("{}", render_popup(&view));
            }
            AppEvent::Notice(message) => {
                println!("{message}");
            }
            AppEvent::UiEvent(UiEvent::Close) => break,
            AppEvent::UiEvent(_) => {}
            _ => {}
        }
    }

    Ok(())
}
