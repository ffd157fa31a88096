//! Index console engine: HTTP client for the index service and the
//! background runner that executes requests.
mod client;
pub mod contracts;
mod engine;
mod types;

pub use client::{ApiSettings, IndexApi, ReqwestIndexApi, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineCommand, EngineError, EngineHandle, EventSink};
pub use types::{ApiError, EngineEvent, FailureKind, RequestId};
