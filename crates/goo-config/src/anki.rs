use std::env;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_deck() -> String {
    "Japanese".to_string()
}

fn default_model() -> String {
    "Basic".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// Enable Anki integration
    pub enabled: bool,
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Default deck name
    #[serde(default = "default_deck")]
    pub deck: String,
    /// Default model name
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_url(),
            deck: default_deck(),
            model: default_model(),
        }
    }
}

impl AnkiConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub(crate) fn apply_env(&mut self) {
        if let Ok(url) = env::var("ANKI_CONNECT_URL") {
            self.url = url;
        }
    }
}
