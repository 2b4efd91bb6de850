use std::fmt;

use research_core::{RequestId, SourceRecord};

use crate::EngineError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SourcesFound {
        request_id: RequestId,
        result: Result<Vec<SourceRecord>, EngineError>,
    },
    ScriptGenerated {
        request_id: RequestId,
        result: Result<String, EngineError>,
    },
}

/// The backend could not be reached, rejected the call, or answered with
/// nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct UpstreamError {
    pub kind: UpstreamKind,
    pub message: String,
}

impl UpstreamError {
    pub(crate) fn new(kind: UpstreamKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    Network,
    Blocked { reason: String },
    EmptyResponse,
    Decode,
}

impl fmt::Display for UpstreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            UpstreamKind::HttpStatus(code) => write!(f, "http status {code}"),
            UpstreamKind::Timeout => write!(f, "timeout"),
            UpstreamKind::Network => write!(f, "network error"),
            UpstreamKind::Blocked { reason } => write!(f, "request blocked ({reason})"),
            UpstreamKind::EmptyResponse => write!(f, "empty response"),
            UpstreamKind::Decode => write!(f, "undecodable response"),
        }
    }
}
