use std::fmt;

use crate::contracts::{CrawlResponse, HealthResponse, SearchResponse};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<SearchResponse, ApiError>,
    },
    CrawlCompleted {
        request_id: RequestId,
        result: Result<CrawlResponse, ApiError>,
    },
    ResetCompleted {
        request_id: RequestId,
        result: Result<(), ApiError>,
    },
    HealthChecked {
        result: Result<HealthResponse, ApiError>,
    },
}

impl EngineEvent {
    pub fn request_id(&self) -> Option<RequestId> {
        match self {
            EngineEvent::SearchCompleted { request_id, .. }
            | EngineEvent::CrawlCompleted { request_id, .. }
            | EngineEvent::ResetCompleted { request_id, .. } => Some(*request_id),
            EngineEvent::HealthChecked { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidBaseUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Encode,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidBaseUrl => write!(f, "invalid base url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Encode => write!(f, "request encoding error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
