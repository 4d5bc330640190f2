use std::time::Duration;

use arboard::Clipboard;
use tokio::time;

/// Poll the clipboard and report every new non-empty text it carries.
/// Selections copied on a page show up here and become the current capture.
pub async fn watch_clipboard<F>(poll_interval: Duration, mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let mut clipboard = Clipboard::new()?;
    let mut last_text = String::new();

    let mut interval = time::interval(poll_interval);

    loop {
        interval.tick().await;
        if let Ok(text) = clipboard.get_text()
            && !text.is_empty()
            && text != last_text
        {
            last_text = text.clone();
            on_text(text);
        }
    }
}

/// Put result text on the clipboard (the popup's copy action).
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
