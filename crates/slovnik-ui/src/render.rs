use slovnik_types::{DictionaryEntry, PopupView};

/// Shown in place of an empty or absent translation.
const NO_TRANSLATION: &str = "—";

/// Shown when the dictionary has no entries yet.
pub const EMPTY_DICTIONARY: &str = "Словарь пуст";

/// Build the overlay panel: a two-column table of the whole dictionary in
/// insertion order, or the literal empty-state line.
pub fn render_overlay(entries: &[DictionaryEntry]) -> String {
    let mut out = String::new();
    out.push_str("━━━ Словарь ━━━\n");

    if entries.is_empty() {
        out.push_str(EMPTY_DICTIONARY);
        out.push('\n');
        return out;
    }

    let word_width = entries
        .iter()
        .map(|e| e.word.chars().count())
        .max()
        .unwrap_or(0)
        .max("Слово".chars().count());

    out.push_str(&format!("{:word_width$}  {}\n", "Слово", "Перевод"));
    for entry in entries {
        let translation = if entry.translation.is_empty() {
            NO_TRANSLATION
        } else {
            &entry.translation
        };
        out.push_str(&format!("{:word_width$}  {translation}\n", entry.word));
    }

    out
}

/// Build the popup view: mode title, the original selection, the result.
pub fn render_popup(view: &PopupView) -> String {
    format!(
        "━━━ {} ━━━\n> {}\n\n{}\n",
        view.mode.title(),
        view.original,
        view.result
    )
}
