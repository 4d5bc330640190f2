use std::time::Duration;

pub mod google;
pub mod simulate;

pub use google::GoogleTranslator;
pub use simulate::SimulatedProcessor;

/// Fixed placeholder yielded whenever a translation cannot be produced.
/// Part of the external contract; callers never see a hard failure.
pub const TRANSLATION_UNAVAILABLE: &str = "(перевод недоступен)";

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<String, TranslateError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// One bounded attempt against the gateway. Any failure, malformed payload,
/// or timeout collapses to the fallback placeholder so callers need no
/// failure branch for this call.
pub async fn translate_or_fallback(
    translator: &dyn Translator,
    text: &str,
    from: &str,
    to: &str,
    timeout: Duration,
) -> String {
    match tokio::time::timeout(timeout, translator.translate(text, from, to)).await {
        Ok(Ok(translation)) => translation,
        Ok(Err(e)) => {
            tracing::warn!("translation failed: {e}");
            TRANSLATION_UNAVAILABLE.to_string()
        }
        Err(_) => {
            tracing::warn!("translation timed out after {timeout:?}");
            TRANSLATION_UNAVAILABLE.to_string()
        }
    }
}
