use serde::{Deserialize, Serialize};

/// How the words to look up are pulled out of a source field.
///
/// Serialised with the labels the host's add-on config uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExtractionMode {
    /// The whole field is one term
    #[default]
    Single,
    /// Every `<b>..</b>` span
    #[serde(rename = "Bold font")]
    BoldFont,
    /// Answers of `{{cN::answer}}` deletions
    Cloze,
    /// Hints of `{{cN::answer::hint}}` deletions
    #[serde(rename = "Cloze hint")]
    ClozeHint,
    /// The field text with every deletion replaced by its answer
    #[serde(rename = "Ignore cloze")]
    IgnoreCloze,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Single => "Single",
            ExtractionMode::BoldFont => "Bold font",
            ExtractionMode::Cloze => "Cloze",
            ExtractionMode::ClozeHint => "Cloze hint",
            ExtractionMode::IgnoreCloze => "Ignore cloze",
        }
    }
}

impl std::str::FromStr for ExtractionMode {
    type Err = String;

    /// Accepts the config labels as well as kebab-case (`cloze-hint`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "single" => Ok(ExtractionMode::Single),
            "bold" | "bold font" => Ok(ExtractionMode::BoldFont),
            "cloze" => Ok(ExtractionMode::Cloze),
            "cloze hint" => Ok(ExtractionMode::ClozeHint),
            "ignore cloze" => Ok(ExtractionMode::IgnoreCloze),
            other => Err(format!("unknown extraction mode: {other}")),
        }
    }
}
