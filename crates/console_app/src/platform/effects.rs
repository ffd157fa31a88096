use std::sync::{mpsc, Arc};

use console_core::{CrawlSummary, Effect, Msg, RequestFailed, SearchHit, SearchOutcome};
use console_engine::contracts::{CrawlResponse, SearchResponse};
use console_engine::{
    ApiSettings, EngineCommand, EngineError, EngineEvent, EngineHandle, EventSink,
};
use console_logging::{console_info, console_warn};

/// Executes core effects: requests go to the engine, links to the browser.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx: msg_tx }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OpenLink { url } => open_in_browser(&url),
                other => {
                    if let Some(command) = command_for(other) {
                        self.engine.submit(command);
                    }
                }
            }
        }
    }
}

/// Forwards engine completions into the UI message queue.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event_to_msg(event));
    }
}

pub fn command_for(effect: Effect) -> Option<EngineCommand> {
    let command = match effect {
        Effect::Search { request_id, term } => {
            console_info!("Search request_id={} term_len={}", request_id, term.len());
            EngineCommand::Search { request_id, term }
        }
        Effect::Crawl { request_id, url } => {
            console_info!("Crawl request_id={} url={}", request_id, url);
            EngineCommand::Crawl { request_id, url }
        }
        Effect::ResetIndex { request_id } => {
            console_info!("ResetIndex request_id={}", request_id);
            EngineCommand::Reset { request_id }
        }
        Effect::CheckHealth => EngineCommand::CheckHealth,
        Effect::OpenLink { .. } => return None,
    };
    Some(command)
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchCompleted {
            request_id,
            result: result.map(search_outcome).map_err(|_| RequestFailed),
        },
        EngineEvent::CrawlCompleted { request_id, result } => Msg::CrawlCompleted {
            request_id,
            result: result.map(crawl_summary).map_err(|_| RequestFailed),
        },
        EngineEvent::ResetCompleted { request_id, result } => Msg::ResetCompleted {
            request_id,
            result: result.map_err(|_| RequestFailed),
        },
        EngineEvent::HealthChecked { result } => {
            let online = match result {
                Ok(health) => health.ok,
                Err(err) => {
                    console_warn!("Health probe failed: {}", err);
                    false
                }
            };
            Msg::HealthChecked { online }
        }
    }
}

fn search_outcome(response: SearchResponse) -> SearchOutcome {
    SearchOutcome {
        hits: response.results.map(|results| {
            results
                .into_iter()
                .map(|result| SearchHit {
                    url: result.url,
                    title: result.title,
                    match_count: result.count,
                })
                .collect()
        }),
        duration_seconds: response.duration_seconds,
    }
}

fn crawl_summary(response: CrawlResponse) -> CrawlSummary {
    CrawlSummary {
        pages_crawled: response.pages_crawled,
        words_indexed: response.words_indexed,
        duration_seconds: response.duration_seconds,
        crawl_errors: response.crawl_errors,
    }
}

fn open_in_browser(url: &str) {
    console_info!("Opening {} in browser", url);
    if let Err(err) = open::that_detached(url) {
        console_warn!("Failed to open {}: {}", url, err);
    }
}
