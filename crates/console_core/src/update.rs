use console_logging::{console_debug, console_info};

use crate::workflow::Resolution;
use crate::{AppState, Effect, Msg, RequestId, ServiceHealth};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Bootstrap => {
            state.select_default_tab();
            state.set_health(ServiceHealth::Checking);
            vec![Effect::CheckHealth]
        }
        Msg::TabActivated { panel, origin } => {
            state.activate_tab(panel, origin);
            Vec::new()
        }
        Msg::SearchTermChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::IndexUrlChanged(url) => {
            state.set_index_url(url);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            // No client-side validation: an empty term goes out as-is.
            let request_id = state.begin_search();
            vec![Effect::Search {
                request_id,
                term: state.search_term().to_string(),
            }]
        }
        Msg::CrawlSubmitted => {
            let request_id = state.begin_crawl();
            vec![Effect::Crawl {
                request_id,
                url: state.index_url().to_string(),
            }]
        }
        Msg::ResetClicked => {
            let request_id = state.begin_reset();
            vec![Effect::ResetIndex { request_id }]
        }
        Msg::ResultOpened { row } => match state.search_hit(row) {
            Some(hit) => vec![Effect::OpenLink {
                url: hit.url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::SearchCompleted { request_id, result } => {
            let resolution = state.complete_search(request_id, result);
            log_resolution("search", request_id, resolution);
            Vec::new()
        }
        Msg::CrawlCompleted { request_id, result } => {
            let resolution = state.complete_crawl(request_id, result);
            log_resolution("crawl", request_id, resolution);
            Vec::new()
        }
        Msg::ResetCompleted { request_id, result } => {
            let resolution = state.complete_reset(request_id, result);
            log_resolution("reset", request_id, resolution);
            Vec::new()
        }
        Msg::HealthChecked { online } => {
            let health = if online {
                ServiceHealth::Online
            } else {
                ServiceHealth::Offline
            };
            state.set_health(health);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn log_resolution(workflow: &str, request_id: RequestId, resolution: Resolution) {
    match resolution {
        Resolution::Applied => console_debug!("{workflow} request {request_id} resolved"),
        Resolution::Stale => {
            console_info!("discarding stale {workflow} completion for request {request_id}")
        }
    }
}
