use goo_config::network::NetworkConfig;

use crate::cleaner::clean_fragment;
use crate::encode::search_url;
use crate::entry::DictionaryEntry;
use crate::error::{DictionaryError, FetchError};
use crate::fetcher::{HttpFetcher, PageFetcher};
use crate::render::render_definitions;
use crate::scan::{between, spans};

/// Phrase the site shows when a search matched nothing
pub const NO_MATCH_MARKER: &str = "一致する情報は見つかりませんでした";

const RESULTS_OPEN: &str = r#"<ul class="content_list idiom lsize">"#;
const RESULTS_CLOSE: &str = "</div>";
const ROW_OPEN: &str = "<a href=";
const ROW_CLOSE: &str = "</a>";

/// Layout of a fetched search page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPage<'a> {
    /// Disambiguation list; holds the inside of the results container
    Results(&'a str),
    /// The search landed directly on an entry page
    Entry(&'a str),
}

impl<'a> SearchPage<'a> {
    /// Decided by the presence of the results container alone
    pub fn classify(page: &'a str) -> Self {
        match between(page, RESULTS_OPEN, RESULTS_CLOSE) {
            Some(results) => SearchPage::Results(results),
            None => SearchPage::Entry(page),
        }
    }
}

/// Fetch the search page for `word`, reporting misses and transport errors
pub fn fetch_search_page<F>(word: &str, fetcher: &F) -> Result<String, DictionaryError>
where
    F: PageFetcher + ?Sized,
{
    let page = fetcher.fetch(&search_url(word))?;
    if page.contains(NO_MATCH_MARKER) {
        return Err(DictionaryError::NoMatch {
            word: word.to_string(),
        });
    }
    Ok(page)
}

/// Turn a successfully fetched search page into entries
pub fn parse_search_page(word: &str, page: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    match SearchPage::classify(page) {
        SearchPage::Entry(page) => {
            tracing::debug!("'{}' resolved to an entry page", word);
            Ok(vec![DictionaryEntry::from_entry_page(word, page)?])
        }
        SearchPage::Results(results) => {
            let rows = spans(results, ROW_OPEN, ROW_CLOSE);
            // a list with text but no rows means the row markup changed
            if rows.is_empty() && !clean_fragment(results).is_empty() {
                return Err(DictionaryError::malformed("result rows"));
            }
            tracing::debug!("'{}' has {} search results", word, rows.len());
            rows.into_iter()
                .map(|row| DictionaryEntry::from_snippet(word, row))
                .collect()
        }
    }
}

/// Look `word` up. Misses and connection failures come back as a single
/// placeholder entry; only malformed pages are errors.
pub fn search<F>(word: &str, fetcher: &F) -> Result<Vec<DictionaryEntry>, DictionaryError>
where
    F: PageFetcher + ?Sized,
{
    tracing::info!("Looking up '{}'", word);
    match fetch_search_page(word, fetcher) {
        Ok(page) => parse_search_page(word, &page),
        Err(DictionaryError::NoMatch { word }) => {
            tracing::info!("No match for '{}'", word);
            Ok(vec![DictionaryEntry::not_found(&word)])
        }
        Err(DictionaryError::Connection(e)) => {
            tracing::warn!("Search for '{}' failed: {}", word, e);
            Ok(vec![DictionaryEntry::connection_error()])
        }
        Err(e) => Err(e),
    }
}

/// goo辞書 lookups through a fetcher
pub struct GooDictionary<F = HttpFetcher> {
    fetcher: F,
}

impl GooDictionary<HttpFetcher> {
    pub fn new() -> Self {
        Self::with_fetcher(HttpFetcher::new())
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self, FetchError> {
        Ok(Self::with_fetcher(HttpFetcher::from_config(config)?))
    }
}

impl Default for GooDictionary<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PageFetcher> GooDictionary<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn search(&self, word: &str) -> Result<Vec<DictionaryEntry>, DictionaryError> {
        search(word, &self.fetcher)
    }

    pub fn full_definition(&self, entry: &DictionaryEntry) -> Result<String, DictionaryError> {
        entry.full_definition(&self.fetcher)
    }

    pub fn render(&self, entries: &[DictionaryEntry]) -> Result<String, DictionaryError> {
        render_definitions(entries, &self.fetcher)
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
