use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "slovnik.json".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON storage file
    #[serde(default = "default_path")]
    pub path: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let path = env::var("SLOVNIK_STORAGE").unwrap_or_else(|_| default_path());
        Self { path }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
