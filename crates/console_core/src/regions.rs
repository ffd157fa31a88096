//! Result regions and the pure functions that fill them from workflow state.

use crate::workflow::RequestState;
use crate::{CrawlSummary, SearchOutcome};

pub const SEARCHING: &str = "Searching...";
pub const NO_RESULTS: &str = "No results found";
pub const SEARCH_FAILED: &str = "An error occurred during search";
pub const CRAWL_FAILED: &str =
    "An error occurred indexing the page. Make sure your index url starts with http(s)://";
pub const RESETTING: &str = "Resetting the index...";
pub const RESET_DONE: &str = "Index has been reset";
pub const RESET_FAILED: &str = "An error occurred resetting the index";

/// Output areas, each owned by exactly one workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    SearchResults,
    IndexResults,
    IndexErrors,
    ResetResults,
}

impl RegionId {
    pub const ALL: [RegionId; 4] = [
        RegionId::SearchResults,
        RegionId::IndexResults,
        RegionId::IndexErrors,
        RegionId::ResetResults,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionContent {
    #[default]
    Empty,
    Text(String),
    Table(TableView),
}

impl RegionContent {
    pub fn text(value: impl Into<String>) -> Self {
        RegionContent::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RegionContent::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RegionContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableView> {
        match self {
            RegionContent::Table(table) => Some(table),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellView>>,
}

impl TableView {
    fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Text(String),
    /// Hyperlink opened in a separate browsing context.
    Link { text: String, href: String },
}

impl CellView {
    /// Visible text of the cell.
    pub fn label(&self) -> &str {
        match self {
            CellView::Text(text) => text,
            CellView::Link { text, .. } => text,
        }
    }
}

pub(crate) fn search_region(state: &RequestState<SearchOutcome>) -> RegionContent {
    match state {
        RequestState::Idle => RegionContent::Empty,
        RequestState::Pending { .. } => RegionContent::text(SEARCHING),
        RequestState::Succeeded(outcome) => match outcome.visible_hits() {
            Some(hits) => {
                let mut table = TableView::with_headers(&["Url", "Matches"]);
                table.rows = hits
                    .iter()
                    .map(|hit| {
                        vec![
                            CellView::Link {
                                text: hit.title.clone(),
                                href: hit.url.clone(),
                            },
                            CellView::Text(hit.match_count.to_string()),
                        ]
                    })
                    .collect();
                RegionContent::Table(table)
            }
            None => RegionContent::text(NO_RESULTS),
        },
        RequestState::Failed => RegionContent::text(SEARCH_FAILED),
    }
}

pub(crate) fn index_results_region(
    state: &RequestState<CrawlSummary>,
    target: &str,
) -> RegionContent {
    match state {
        RequestState::Idle => RegionContent::Empty,
        RequestState::Pending { .. } => RegionContent::Text(format!("Indexing {target}...")),
        RequestState::Succeeded(summary) => {
            let mut table = TableView::with_headers(&["Pages", "Words Indexed", "Duration (s)"]);
            table.rows.push(vec![
                CellView::Text(summary.pages_crawled.to_string()),
                CellView::Text(summary.words_indexed.to_string()),
                CellView::Text(summary.duration_seconds.to_string()),
            ]);
            RegionContent::Table(table)
        }
        RequestState::Failed => RegionContent::text(CRAWL_FAILED),
    }
}

pub(crate) fn index_errors_region(state: &RequestState<CrawlSummary>) -> RegionContent {
    let RequestState::Succeeded(summary) = state else {
        return RegionContent::Empty;
    };
    match summary.visible_errors() {
        Some(errors) => {
            let mut table = TableView::with_headers(&["Errors"]);
            table.rows = errors
                .iter()
                .map(|error| vec![CellView::Text(error.clone())])
                .collect();
            RegionContent::Table(table)
        }
        None => RegionContent::Empty,
    }
}

pub(crate) fn reset_region(state: &RequestState<()>) -> RegionContent {
    match state {
        RequestState::Idle => RegionContent::Empty,
        RequestState::Pending { .. } => RegionContent::text(RESETTING),
        RequestState::Succeeded(()) => RegionContent::text(RESET_DONE),
        RequestState::Failed => RegionContent::text(RESET_FAILED),
    }
}
