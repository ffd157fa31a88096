//! Index console core: pure state machine and view-model helpers.
mod effect;
pub mod markup;
mod msg;
mod regions;
mod results;
mod state;
mod tabs;
mod update;
mod view_model;
mod workflow;

pub use effect::Effect;
pub use msg::Msg;
pub use regions::{
    CellView, RegionContent, RegionId, TableView, CRAWL_FAILED, NO_RESULTS, RESETTING,
    RESET_DONE, RESET_FAILED, SEARCHING, SEARCH_FAILED,
};
pub use results::{CrawlSummary, SearchHit, SearchOutcome, ServiceHealth};
pub use state::AppState;
pub use tabs::{Panel, TabController, TabLink};
pub use update::update;
pub use view_model::{AppViewModel, PanelView, TabView};
pub use workflow::{RequestFailed, RequestId, RequestState, Resolution, Workflow};
