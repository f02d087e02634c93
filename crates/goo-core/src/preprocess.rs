use goo_types::ExtractionMode;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"(?s)<b>(.+?)</b>").unwrap();
    static ref CLOZE_ANSWER: Regex = Regex::new(r"(?s)\{\{c\d+::(.+?)(?:::|\}\})").unwrap();
    static ref CLOZE_HINT: Regex = Regex::new(r"(?s)\{\{c\d+::[^}]+?::(.+?)\}\}").unwrap();
    static ref CLOZE_WHOLE: Regex =
        Regex::new(r"(?s)\{\{c\d+::(.+?)(?:\}\}|::.+?\}\})").unwrap();
}

pub trait Preprocessor {
    // Default lookup-term cleanup
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC so decomposed dakuten (か + ゙) reach the site as が
        let text: String = text.nfc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Pull the words to look up out of a note field
pub fn extract_terms(mode: ExtractionMode, field: &str) -> Vec<String> {
    let raw: Vec<String> = match mode {
        ExtractionMode::Single => vec![field.to_string()],
        ExtractionMode::BoldFont => captures(&BOLD, field),
        ExtractionMode::Cloze => captures(&CLOZE_ANSWER, field),
        ExtractionMode::ClozeHint => captures(&CLOZE_HINT, field),
        ExtractionMode::IgnoreCloze => vec![
            CLOZE_WHOLE
                .replace_all(field, |caps: &Captures| caps[1].to_string())
                .into_owned(),
        ],
    };

    let preprocessor = DefaultPreprocessor;
    let terms: Vec<String> = raw
        .iter()
        .map(|term| preprocessor.process(term))
        .filter(|term| !term.is_empty())
        .collect();

    tracing::debug!("Extracted {} term(s) with mode '{}'", terms.len(), mode.as_str());
    terms
}

fn captures(pattern: &Regex, field: &str) -> Vec<String> {
    pattern
        .captures_iter(field)
        .map(|caps| caps[1].to_string())
        .collect()
}
