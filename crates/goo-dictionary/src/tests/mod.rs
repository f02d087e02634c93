mod search_tests;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::FetchError;
use crate::fetcher::PageFetcher;

/// Serves canned pages and records every URL asked for. Unknown URLs fail
/// like an unreachable host.
#[derive(Default)]
pub(crate) struct FakeFetcher {
    pages: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Connection(format!("no route to {url}")))
    }
}
