use std::fmt;
use std::hash::{Hash, Hasher};

use lazy_static::lazy_static;
use regex::Regex;

use crate::SITE_ROOT;
use crate::cleaner::{clean_definition, clean_fragment};
use crate::error::DictionaryError;
use crate::fetcher::PageFetcher;
use crate::scan::{after, between};

/// Label and headword of the placeholder entries
pub const FAILURE_LABEL: &str = "失敗";

const SNIPPET_TEXT_OPEN: &str = r#"<p class="text">"#;
const SNIPPET_TITLE_OPEN: &str = r#"<p class="title">"#;
const WORD_PATH: &str = "/word/";

const OG_TITLE: &str = r#""og:title" content=""#;
const OG_TITLE_SUFFIX: &str = "の意味";

const ENTRY_ANCHOR: &str = r#"<div id="jn-"#;
const CONTENT_OPEN: &str = r#"<div class="content-box contents_area meaning_area p10">"#;
const CONTENT_CLOSE: &str = "<!-- /contents -->";

const READING_SEPARATORS: [char; 3] = ['・', '‐', '-'];

lazy_static! {
    static ref ARTIFACTS: Regex = Regex::new(r"<img.+?>|&#x32[0-9A-Fa-f]{2};").unwrap();
}

/// Which page variant produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Snippet,
    EntryPage,
    NotFound,
    ConnectionError,
}

/// One dictionary hit. Equal when word and short definition match.
#[derive(Debug, Clone)]
pub struct DictionaryEntry {
    source_label: String,
    word: String,
    short_definition: String,
    full_definition_url: Option<String>,
    source: EntrySource,
}

impl DictionaryEntry {
    fn new(
        source: EntrySource,
        source_label: String,
        word: String,
        short_definition: &str,
        full_definition_url: Option<String>,
    ) -> Self {
        Self {
            source_label,
            word,
            short_definition: ARTIFACTS.replace_all(short_definition, "").into_owned(),
            full_definition_url: full_definition_url.filter(|url| !url.is_empty()),
            source,
        }
    }

    /// Parse one row of a search-result list
    pub fn from_snippet(label: &str, row: &str) -> Result<Self, DictionaryError> {
        let text = between(row, SNIPPET_TEXT_OPEN, "</p>")
            .ok_or(DictionaryError::malformed("snippet text"))?;

        let path = between(row, WORD_PATH, "\"").ok_or(DictionaryError::malformed("entry link"))?;
        // without a fragment the entry page block cannot be located
        let url = path
            .contains('#')
            .then(|| format!("{SITE_ROOT}{WORD_PATH}{path}"));

        let title = after(row, SNIPPET_TITLE_OPEN)
            .and_then(|rest| rest.split([' ', '<']).next())
            .filter(|title| !title.is_empty())
            .ok_or(DictionaryError::malformed("snippet title"))?;

        Ok(Self::new(
            EntrySource::Snippet,
            label.to_string(),
            normalize_headword(title),
            &clean_fragment(text),
            url,
        ))
    }

    /// Parse a full entry page the search redirected to
    pub fn from_entry_page(label: &str, page: &str) -> Result<Self, DictionaryError> {
        let title = between(page, OG_TITLE, "\"")
            .and_then(|content| content.split_once(OG_TITLE_SUFFIX))
            .map(|(title, _)| title)
            .ok_or(DictionaryError::malformed("og:title"))?;

        let anchored = after(page, ENTRY_ANCHOR)
            .and_then(|rest| after(rest, "_\""))
            .ok_or(DictionaryError::malformed("entry anchor"))?;
        let block = between(anchored, CONTENT_OPEN, CONTENT_CLOSE)
            .ok_or(DictionaryError::malformed("definition content"))?;

        Ok(Self::new(
            EntrySource::EntryPage,
            label.to_string(),
            normalize_headword(title.trim()),
            &clean_definition(block),
            None,
        ))
    }

    /// Placeholder for a search the site had no results for
    pub fn not_found(word: &str) -> Self {
        Self::new(
            EntrySource::NotFound,
            FAILURE_LABEL.to_string(),
            FAILURE_LABEL.to_string(),
            &format!("goo辞書で「{word}」に一致する情報は見つかりませんでした"),
            None,
        )
    }

    /// Placeholder for a search that never reached the site
    pub fn connection_error() -> Self {
        Self::new(
            EntrySource::ConnectionError,
            FAILURE_LABEL.to_string(),
            FAILURE_LABEL.to_string(),
            "goo辞書に接続出来ませんでした",
            None,
        )
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn short_definition(&self) -> &str {
        &self.short_definition
    }

    pub fn full_definition_url(&self) -> Option<&str> {
        self.full_definition_url.as_deref()
    }

    pub fn source(&self) -> EntrySource {
        self.source
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(
            self.source,
            EntrySource::NotFound | EntrySource::ConnectionError
        )
    }

    /// Whether the short definition was cut off and a longer one can be fetched
    pub fn is_truncated(&self) -> bool {
        self.full_definition_url.is_some()
            && (self.short_definition.ends_with("...") || self.short_definition.ends_with('…'))
    }

    /// The full definition, fetched only when the short one is truncated.
    ///
    /// A connection failure falls back to the short definition; a fetched
    /// page without the linked block is a `MalformedPage` error.
    pub fn full_definition<F>(&self, fetcher: &F) -> Result<String, DictionaryError>
    where
        F: PageFetcher + ?Sized,
    {
        let Some(url) = self.full_definition_url.as_deref() else {
            return Ok(self.short_definition.clone());
        };
        if !self.is_truncated() {
            return Ok(self.short_definition.clone());
        }

        let fragment = url.rsplit('#').next().unwrap_or_default();
        let page = match fetcher.fetch(url) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Keeping short definition of '{}': {}", self.word, e);
                return Ok(self.short_definition.clone());
            }
        };

        let anchor = format!(r#"<div id="{fragment}_""#);
        let block = after(&page, &anchor)
            .and_then(|rest| between(rest, CONTENT_OPEN, CONTENT_CLOSE))
            .ok_or(DictionaryError::malformed("linked definition block"))?;

        Ok(clean_definition(block))
    }
}

impl PartialEq for DictionaryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.short_definition == other.short_definition
    }
}

impl Eq for DictionaryEntry {}

impl Hash for DictionaryEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.short_definition.hash(state);
    }
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.short_definition)
    }
}

/// `いく【行く】` becomes `行く（いく）`; other headwords pass through
pub fn normalize_headword(title: &str) -> String {
    let Some((reading, rest)) = title.split_once('【') else {
        return title.to_string();
    };
    let Some((kanji, _)) = rest.split_once('】') else {
        return title.to_string();
    };

    let reading: String = reading
        .chars()
        .filter(|c| !READING_SEPARATORS.contains(c))
        .collect();

    if reading.is_empty() {
        kanji.to_string()
    } else {
        format!("{kanji}（{reading}）")
    }
}
