use futures_util::StreamExt;
use tokio_tungstenite::connect_async;

/// Connect to the local command bus and hand every text frame to the
/// callback. Frames carry JSON-tagged action requests; parsing is the
/// caller's concern.
pub async fn start_ws_listener<F>(url: &str, mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let (ws_stream, _) = connect_async(url).await?;
    let (_, mut read) = ws_stream.split();

    tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            if let Ok(msg) = msg
                && msg.is_text()
                && let Ok(text) = msg.to_text()
            {
                on_text(text.to_string());
            }
        }
    });

    Ok(())
}
