use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use console_logging::{console_debug, console_warn};

use crate::client::{ApiSettings, IndexApi, ReqwestIndexApi};
use crate::{ApiError, EngineEvent, RequestId};

/// Work the engine can be asked to do. Every request-carrying command is
/// answered by exactly one [`EngineEvent`] with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Search { request_id: RequestId, term: String },
    Crawl { request_id: RequestId, url: String },
    Reset { request_id: RequestId },
    CheckHealth,
}

/// Receives engine completions. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Front door to the background request runner.
///
/// Commands are executed concurrently on a tokio runtime owned by a
/// dedicated thread; `submit` never blocks. Dropping every handle stops the
/// runner and abandons requests still in flight.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let api = ReqwestIndexApi::new(settings)?;
        Self::with_api(Arc::new(api), sink)
    }

    pub fn with_api(api: Arc<dyn IndexApi>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, sink.as_ref()).await;
                });
            }
            console_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn submit(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            console_warn!("engine runner is gone; command dropped");
        }
    }
}

async fn handle_command(api: &dyn IndexApi, command: EngineCommand, sink: &dyn EventSink) {
    let event = match command {
        EngineCommand::Search { request_id, term } => EngineEvent::SearchCompleted {
            request_id,
            result: log_failure("search", request_id, api.search(&term).await),
        },
        EngineCommand::Crawl { request_id, url } => EngineEvent::CrawlCompleted {
            request_id,
            result: log_failure("crawl", request_id, api.crawl(&url).await),
        },
        EngineCommand::Reset { request_id } => EngineEvent::ResetCompleted {
            request_id,
            result: log_failure("reset", request_id, api.reset().await),
        },
        EngineCommand::CheckHealth => EngineEvent::HealthChecked {
            result: api.health().await,
        },
    };
    sink.emit(event);
}

fn log_failure<T>(
    workflow: &str,
    request_id: RequestId,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if let Err(err) = &result {
        console_warn!("{workflow} request {request_id} failed: {err}");
    }
    result
}
