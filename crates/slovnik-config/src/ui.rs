use std::env;

use serde::{Deserialize, Serialize};

fn default_clear_capture_on_read() -> bool {
    true
}

fn default_speech_command() -> String {
    "espeak".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Clear the selection capture once the popup has consumed it.
    /// False keeps the legacy "remember last selection" behavior.
    #[serde(default = "default_clear_capture_on_read")]
    pub clear_capture_on_read: bool,
    /// External command used for the popup's speak action
    #[serde(default = "default_speech_command")]
    pub speech_command: String,
}

impl UiConfig {
    pub fn new() -> Self {
        let clear_capture_on_read = env::var("CLEAR_CAPTURE_ON_READ")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_clear_capture_on_read);

        let speech_command =
            env::var("SPEECH_COMMAND").unwrap_or_else(|_| default_speech_command());

        Self {
            clear_capture_on_read,
            speech_command,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clear_capture_on_read: default_clear_capture_on_read(),
            speech_command: default_speech_command(),
        }
    }
}
