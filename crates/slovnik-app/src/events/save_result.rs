use kanal::AsyncSender;
use slovnik_store::{Store, UpsertOutcome};
use slovnik_types::{ActionMode, AppEvent};

/// The popup save path: upsert with the producing mode and a fresh
/// RFC 3339 timestamp.
pub async fn handle_save_result(
    store: &Store,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    word: &str,
    result: &str,
    mode: ActionMode,
) -> anyhow::Result<()> {
    let date = chrono::Utc::now().to_rfc3339();

    match store.upsert(word, result, Some(mode), Some(date)).await {
        Ok(UpsertOutcome::Skipped) => {}
        Ok(_) => {
            app_to_ui_tx
                .send(AppEvent::Notice("Saved to dictionary!".to_string()))
                .await?;
        }
        Err(e) => {
            tracing::error!("failed to save result for \"{word}\": {e}");
            app_to_ui_tx
                .send(AppEvent::Notice("Не удалось сохранить слово".to_string()))
                .await?;
        }
    }

    Ok(())
}
