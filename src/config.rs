use crate::{BASE_URL, MAX_PAGES};

/// Where to crawl and how far to go before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Relative "next" links are appended to this address.
    pub base_url: String,
    /// Upper bound on fetched pages, so a cyclic pager can't loop forever.
    pub max_pages: usize,
}

impl CrawlConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_pages: MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}
