use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::network::NetworkConfig;
use self::notetype::NoteTypeConfig;

pub mod anki;
pub mod network;
pub mod notetype;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Note type '{note_type}' reads from '{src}' but has no destination field")]
    Mismatch { note_type: String, src: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub anki: AnkiConfig,
    /// Note types the lookup is enabled for
    pub notetypes: Vec<NoteTypeConfig>,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            network: NetworkConfig::new(),
            anki: AnkiConfig::new(),
            notetypes: vec![],
        }
    }

    /// Load a JSON config file; environment overrides win over the file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)?;
        let mut config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.network.apply_env();
        config.anki.apply_env();
        for notetype in &config.notetypes {
            notetype.validate()?;
        }
        Ok(config)
    }

    /// Every binding configured for the given note type name
    pub fn note_types_for(&self, name: &str) -> Vec<&NoteTypeConfig> {
        self.notetypes.iter().filter(|n| n.name == name).collect()
    }
}
