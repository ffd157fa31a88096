use crate::regions::{index_errors_region, index_results_region, reset_region, search_region};
use crate::view_model::{AppViewModel, PanelView, TabView};
use crate::workflow::{RequestFailed, RequestState, Resolution, Workflow};
use crate::{
    CrawlSummary, Panel, RequestId, SearchHit, SearchOutcome, ServiceHealth, TabController,
    TabLink,
};

/// Everything the console shows, owned by the UI thread.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    tabs: TabController,
    search_term: String,
    index_url: String,
    search: Workflow<SearchOutcome>,
    crawl: Workflow<CrawlSummary>,
    crawl_target: String,
    reset: Workflow<()>,
    health: ServiceHealth,
    last_search_seconds: Option<f64>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            active_panel: self.tabs.active_panel(),
            panels: Panel::ALL
                .into_iter()
                .map(|panel| PanelView {
                    panel,
                    title: panel.title(),
                    visible: self.tabs.is_visible(panel),
                })
                .collect(),
            tabs: TabLink::ALL
                .into_iter()
                .map(|link| TabView {
                    link,
                    title: link.panel().title(),
                    active: self.tabs.is_link_active(link),
                })
                .collect(),
            search_term: self.search_term.clone(),
            index_url: self.index_url.clone(),
            search_results: search_region(self.search.state()),
            index_results: index_results_region(self.crawl.state(), &self.crawl_target),
            index_errors: index_errors_region(self.crawl.state()),
            reset_results: reset_region(self.reset.state()),
            health: self.health,
            last_search_seconds: self.last_search_seconds,
            dirty: self.dirty,
        }
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    pub fn search_state(&self) -> &RequestState<SearchOutcome> {
        self.search.state()
    }

    pub fn crawl_state(&self) -> &RequestState<CrawlSummary> {
        self.crawl.state()
    }

    pub fn reset_state(&self) -> &RequestState<()> {
        self.reset.state()
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn issue_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    pub(crate) fn activate_tab(&mut self, panel: Panel, origin: Option<TabLink>) {
        self.tabs.activate(panel, origin);
        self.mark_dirty();
    }

    pub(crate) fn select_default_tab(&mut self) {
        self.tabs.select_default();
        self.mark_dirty();
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.search_term != term {
            self.search_term = term;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_index_url(&mut self, url: String) {
        if self.index_url != url {
            self.index_url = url;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_search(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.search.begin(request_id);
        self.mark_dirty();
        request_id
    }

    /// Starts a crawl of the current index URL. The target is captured here
    /// so later edits to the input do not change the pending message.
    pub(crate) fn begin_crawl(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.crawl_target = self.index_url.clone();
        self.crawl.begin(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn begin_reset(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.reset.begin(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn complete_search(
        &mut self,
        request_id: RequestId,
        result: Result<SearchOutcome, RequestFailed>,
    ) -> Resolution {
        let duration = result.as_ref().ok().and_then(|outcome| outcome.duration_seconds);
        let resolution = self.search.resolve(request_id, result);
        if resolution == Resolution::Applied {
            if duration.is_some() {
                self.last_search_seconds = duration;
            }
            self.mark_dirty();
        }
        resolution
    }

    pub(crate) fn complete_crawl(
        &mut self,
        request_id: RequestId,
        result: Result<CrawlSummary, RequestFailed>,
    ) -> Resolution {
        let resolution = self.crawl.resolve(request_id, result);
        if resolution == Resolution::Applied {
            self.mark_dirty();
        }
        resolution
    }

    pub(crate) fn complete_reset(
        &mut self,
        request_id: RequestId,
        result: Result<(), RequestFailed>,
    ) -> Resolution {
        let resolution = self.reset.resolve(request_id, result);
        if resolution == Resolution::Applied {
            self.mark_dirty();
        }
        resolution
    }

    pub(crate) fn set_health(&mut self, health: ServiceHealth) {
        if self.health != health {
            self.health = health;
            self.mark_dirty();
        }
    }

    /// Search hit shown in the given result row, if the table is on screen.
    pub fn search_hit(&self, row: usize) -> Option<&SearchHit> {
        match self.search.state() {
            RequestState::Succeeded(outcome) => outcome.visible_hits()?.get(row),
            _ => None,
        }
    }
}
