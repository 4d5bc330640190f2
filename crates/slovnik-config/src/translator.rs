use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "ru".to_string()
}

fn default_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// When false the simulated processor is used for every mode
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bounded wait for one gateway call before falling back
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let enabled = env::var("TRANSLATOR_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_enabled);

        let from_lang = env::var("SOURCE_LANG").unwrap_or_else(|_| default_from_lang());
        let to_lang = env::var("TARGET_LANG").unwrap_or_else(|_| default_to_lang());
        let api_url = env::var("TRANSLATE_API_URL").unwrap_or_else(|_| default_api_url());

        let timeout_seconds = env::var("TRANSLATE_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            enabled,
            from_lang,
            to_lang,
            api_url,
            timeout_seconds,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
