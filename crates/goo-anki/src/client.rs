use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Blocking client for the AnkiConnect add-on's JSON API
#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// AnkiConnect API version, doubles as a reachability check
    pub fn check_connection(&self) -> Result<u32> {
        let response: AnkiResponse<u32> = self.invoke("version", json!({}))?;
        response.into_result()
    }

    /// Add a note to Anki
    pub fn add_note(&self, deck: &str, model: &str, front: &str, back: &str) -> Result<u64> {
        let params = json!({
            "note": {
                "deckName": deck,
                "modelName": model,
                "fields": {
                    "Front": front,
                    "Back": back
                },
                "tags": ["goo-jisho"]
            }
        });

        let response: AnkiResponse<u64> = self.invoke("addNote", params)?;
        response.into_result()
    }

    fn invoke<T>(&self, action: &str, params: serde_json::Value) -> Result<AnkiResponse<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = AnkiRequest {
            action: action.to_string(),
            version: 6,
            params,
        };

        tracing::debug!("AnkiConnect action '{}'", action);
        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .context("Failed to send request to AnkiConnect")?;

        response
            .json::<AnkiResponse<T>>()
            .context("Failed to parse AnkiConnect response")
    }
}

#[derive(Serialize)]
struct AnkiRequest {
    action: String,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct AnkiResponse<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> AnkiResponse<T> {
    fn into_result(self) -> Result<T> {
        if let Some(error) = self.error {
            anyhow::bail!("AnkiConnect error: {}", error);
        }

        self.result.context("AnkiConnect returned null result")
    }
}
