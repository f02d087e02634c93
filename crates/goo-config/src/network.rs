use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Request timeout, 0 leaves the client default in place
    pub timeout_seconds: u64,
    /// User agent sent to the dictionary site
    pub user_agent: Option<String>,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub(crate) fn apply_env(&mut self) {
        if let Some(timeout) = env::var("GOO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout_seconds = timeout;
        }

        if let Ok(user_agent) = env::var("GOO_USER_AGENT") {
            self.user_agent = Some(user_agent);
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}
