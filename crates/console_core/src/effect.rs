use crate::RequestId;

/// Side effects requested by [`crate::update`]. The platform executes them
/// and reports back through [`crate::Msg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search { request_id: RequestId, term: String },
    Crawl { request_id: RequestId, url: String },
    ResetIndex { request_id: RequestId },
    CheckHealth,
    /// Open a search result in the system browser.
    OpenLink { url: String },
}
