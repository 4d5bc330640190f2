use std::env;

use serde::{Deserialize, Serialize};

use self::storage::StorageConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod storage;
pub mod translator;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub translator: TranslatorConfig,
    pub ui: UiConfig,

    /// Clipboard poll interval
    pub delta_time: u64,
    /// Listen to websocket command bus, if false only the clipboard watcher runs
    pub listen_to_ws: bool,
    /// WebSocket URL to connect to
    pub ws_url: String,
}

impl Config {
    pub fn new() -> Self {
        let delta_time = env::var("DELTA_TIME_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500); // 500ms default

        let listen_to_ws = env::var("LISTEN_TO_WS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        let ws_url = env::var("WS_URL").unwrap_or_else(|_| "ws://localhost:8080".to_string());

        Config {
            storage: StorageConfig::new(),
            translator: TranslatorConfig::new(),
            ui: UiConfig::new(),

            delta_time,
            listen_to_ws,
            ws_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: StorageConfig::default(),
            translator: TranslatorConfig::default(),
            ui: UiConfig::default(),

            delta_time: 500,
            listen_to_ws: true,
            ws_url: "ws://localhost:8080".to_string(),
        }
    }
}
