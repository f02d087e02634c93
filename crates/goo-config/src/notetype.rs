use goo_types::ExtractionMode;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Binds a note type's source field to the field that receives definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteTypeConfig {
    pub name: String,
    pub src: String,
    #[serde(default)]
    pub dst: String,
    #[serde(rename = "type", default)]
    pub mode: ExtractionMode,
}

impl NoteTypeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.src.is_empty() && self.dst.is_empty() {
            return Err(ConfigError::Mismatch {
                note_type: self.name.clone(),
                src: self.src.clone(),
            });
        }
        Ok(())
    }
}
