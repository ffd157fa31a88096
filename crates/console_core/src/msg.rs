use crate::{CrawlSummary, Panel, RequestFailed, RequestId, SearchOutcome, TabLink};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Initial load: select the default panel and probe the service.
    Bootstrap,
    /// A tab was activated; `origin` is `None` for programmatic activation.
    TabActivated {
        panel: Panel,
        origin: Option<TabLink>,
    },
    SearchTermChanged(String),
    SearchSubmitted,
    IndexUrlChanged(String),
    CrawlSubmitted,
    ResetClicked,
    /// User asked to open the link in the given search result row.
    ResultOpened { row: usize },
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchOutcome, RequestFailed>,
    },
    CrawlCompleted {
        request_id: RequestId,
        result: Result<CrawlSummary, RequestFailed>,
    },
    ResetCompleted {
        request_id: RequestId,
        result: Result<(), RequestFailed>,
    },
    HealthChecked { online: bool },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
