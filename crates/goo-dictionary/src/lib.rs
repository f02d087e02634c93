//! Lookups against the goo辞書 Japanese dictionary.
//!
//! A word is percent-encoded into the site's search URL, the returned page
//! is classified (no match, result list, or a direct entry page) and every
//! hit becomes a [`DictionaryEntry`]. Truncated snippet definitions can be
//! expanded on demand by fetching the linked entry page.

pub mod cleaner;
pub mod encode;
pub mod entry;
pub mod error;
pub mod fetcher;
pub mod render;
pub mod search;

mod scan;

#[cfg(test)]
mod tests;

pub use cleaner::{clean_definition, clean_fragment};
pub use encode::search_url;
pub use entry::{DictionaryEntry, EntrySource};
pub use error::{DictionaryError, FetchError};
pub use fetcher::{HttpFetcher, PageFetcher};
pub use render::render_definitions;
pub use search::{GooDictionary, SearchPage, parse_search_page, search};

/// Scheme and host every relative entry link is resolved against
pub const SITE_ROOT: &str = "https://dictionary.goo.ne.jp";
