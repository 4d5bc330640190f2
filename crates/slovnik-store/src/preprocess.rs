use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to captured selections before they are stored.
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Selections pasted from pages often carry hard line breaks
        text = text.replace(['\n', '\r'], " ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
