use shared::error::FailureKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BindError {
    #[error("no binding registered for trigger '{0}'")]
    UnknownTrigger(String),
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed payload from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("payload from {url} has {actual} entries, render needs index {index}")]
    ShapeMismatch {
        url: String,
        index: usize,
        actual: usize,
    },
    #[error("render task for trigger '{trigger}' did not complete: {reason}")]
    TaskFailed { trigger: String, reason: String },
}

impl BindError {
    pub fn kind(&self) -> FailureKind {
        match self {
            BindError::UnknownTrigger(_) | BindError::TaskFailed { .. } => FailureKind::Binding,
            BindError::Network { .. } | BindError::Status { .. } => FailureKind::Network,
            BindError::Parse { .. } => FailureKind::Parse,
            BindError::ShapeMismatch { .. } => FailureKind::ShapeMismatch,
        }
    }
}
