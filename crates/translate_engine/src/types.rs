use std::fmt;

pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Everything received so far for the generation, not just the last chunk.
    Partial { generation: Generation, text: String },
    Completed {
        generation: Generation,
        result: Result<String, TranslateError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TranslateError {
    pub kind: FailureKind,
    pub message: String,
}

impl TranslateError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedStream,
    EmptyResponse,
    /// The endpoint answered with an `error` object instead of content.
    Service,
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedStream => write!(f, "malformed response stream"),
            FailureKind::EmptyResponse => write!(f, "empty response"),
            FailureKind::Service => write!(f, "model service error"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}
