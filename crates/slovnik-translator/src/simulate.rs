use slovnik_types::ActionMode;

/// Offline processor used when the gateway is disabled. Produces canned
/// translations for a handful of known phrases and generated text for the
/// explain/retell modes.
pub struct SimulatedProcessor;

const CANNED_TRANSLATIONS: &[(&str, &str)] = &[
    ("hello", "Привет"),
    ("world", "мир"),
    ("good morning", "Доброе утро"),
    ("thank you", "Спасибо"),
    ("how are you", "Как дела"),
    ("this is a sample text", "Это пример текста"),
    ("artificial intelligence", "искусственный интеллект"),
    ("browser extension", "расширение для браузера"),
];

impl SimulatedProcessor {
    pub fn process(&self, text: &str, mode: ActionMode) -> String {
        match mode {
            ActionMode::Translate => self.translation(text),
            ActionMode::Explain => self.explanation(text),
            ActionMode::Retell => self.retelling(text),
        }
    }

    fn translation(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        CANNED_TRANSLATIONS
            .iter()
            .find(|(word, _)| *word == lower)
            .map(|(_, translation)| (*translation).to_string())
            .unwrap_or_else(|| format!("[Translation]: \"{text}\" → Здесь будет перевод"))
    }

    fn explanation(&self, text: &str) -> String {
        let words = text.split_whitespace().count();
        let kind = if text.len() > 50 {
            "Complex passage"
        } else {
            "Simple phrase"
        };

        format!(
            "Explanation of: \"{text}\"\n\n\
             • Length: {} characters, {words} words\n\
             • Type: {kind}\n\
             • Context: This appears to be standard text requiring explanation",
            text.len()
        )
    }

    fn retelling(&self, text: &str) -> String {
        format!(
            "Retelling: \"{text}\"\n\nSimplified version:\n\"{}\"",
            text.to_lowercase()
        )
    }
}
