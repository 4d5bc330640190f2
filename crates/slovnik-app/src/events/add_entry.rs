use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use slovnik_store::Store;
use slovnik_translator::{translate_or_fallback, SimulatedProcessor, Translator};
use slovnik_types::{ActionMode, AppEvent};

use crate::state::AppState;

/// The context-menu path: translate the selected word and upsert it without
/// mode or date. A word that is blank after trimming is silently dropped.
pub async fn handle_add_entry(
    state: Arc<AppState>,
    store: &Store,
    translator: Option<&dyn Translator>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    word: String,
    translation: Option<String>,
) -> anyhow::Result<()> {
    let word = word.trim().to_string();
    if word.is_empty() {
        return Ok(());
    }

    let translation = match translation {
        Some(translation) => translation,
        None => {
            let (from, to, timeout) = {
                let config = state.config.read().await;
                (
                    config.translator.from_lang.clone(),
                    config.translator.to_lang.clone(),
                    Duration::from_secs(config.translator.timeout_seconds),
                )
            };

            match translator {
                Some(gateway) => {
                    translate_or_fallback(gateway, &word, &from, &to, timeout).await
                }
                None => SimulatedProcessor.process(&word, ActionMode::Translate),
            }
        }
    };

    match store.upsert(&word, &translation, None, None).await {
        Ok(_) => {
            app_to_ui_tx
                .send(AppEvent::Notice(format!(
                    "\"{word}\" → \"{translation}\" добавлено в словарь ✅"
                )))
                .await?;
        }
        Err(e) => {
            tracing::error!("failed to store \"{word}\": {e}");
            app_to_ui_tx
                .send(AppEvent::Notice("Не удалось сохранить слово".to_string()))
                .await?;
        }
    }

    Ok(())
}
