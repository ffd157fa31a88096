pub const APP_TITLE: &str = " Index Console ";
pub const SEARCH_INPUT_TITLE: &str = " Search term (Enter to search) ";
pub const INDEX_INPUT_TITLE: &str = " URL to index (Enter to crawl) ";
pub const SEARCH_RESULTS_TITLE: &str = " Results ";
pub const INDEX_RESULTS_TITLE: &str = " Index ";
pub const INDEX_ERRORS_TITLE: &str = " Crawl errors ";
pub const RESET_TITLE: &str = " Reset (Ctrl+R) ";

pub const SEARCH_HINTS: &str =
    "F1/F2/Tab switch panel | Enter search | Up/Down select | Ctrl+O open link | Esc quit";
pub const CRAWL_HINTS: &str =
    "F1/F2/Tab switch panel | Enter crawl | Ctrl+R reset index | Esc quit";

/// Horizontal padding around a tab title in the tab strip.
pub const TAB_PADDING: u16 = 2;
pub const POLL_INTERVAL_MS: u64 = 50;
