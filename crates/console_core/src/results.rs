/// One page matching a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    pub match_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchOutcome {
    /// `None` when the service reported no matches at all.
    pub hits: Option<Vec<SearchHit>>,
    pub duration_seconds: Option<f64>,
}

impl SearchOutcome {
    /// Hits worth tabulating. Absent and empty lists both count as no results.
    pub fn visible_hits(&self) -> Option<&[SearchHit]> {
        self.hits.as_deref().filter(|hits| !hits.is_empty())
    }
}

/// Statistics reported after a crawl. Per-page failures do not fail the
/// crawl; they are listed in `crawl_errors`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrawlSummary {
    pub pages_crawled: u64,
    pub words_indexed: u64,
    pub duration_seconds: f64,
    pub crawl_errors: Option<Vec<String>>,
}

impl CrawlSummary {
    pub fn visible_errors(&self) -> Option<&[String]> {
        self.crawl_errors
            .as_deref()
            .filter(|errors| !errors.is_empty())
    }
}

/// Reachability of the backing service as reported by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceHealth {
    #[default]
    Unknown,
    Checking,
    Online,
    Offline,
}
