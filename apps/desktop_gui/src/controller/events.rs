//! UI/backend events and error modeling for desktop GUI controller.

use shared::{
    domain::{TargetId, TriggerId},
    error::FailureKind,
};
use view_binder::BindError;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    TargetUpdated { target: TargetId, text: String },
    ActivationFinished { trigger: TriggerId, written: usize },
    ActivationFailed(UiError),
}

#[derive(Debug, Clone)]
pub struct UiError {
    kind: FailureKind,
    trigger: TriggerId,
    message: String,
}

impl UiError {
    pub fn from_bind_error(trigger: TriggerId, err: &BindError) -> Self {
        Self {
            kind: err.kind(),
            trigger,
            message: err.to_string(),
        }
    }

    pub fn task_failed(trigger: TriggerId, reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Binding,
            trigger,
            message: reason.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn trigger(&self) -> &TriggerId {
        &self.trigger
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Short text for the status bar. Nothing on screen is cleared on failure.
    pub fn status_line(&self) -> String {
        let hint = match self.kind {
            FailureKind::Binding => "nothing is bound to this control",
            FailureKind::Network => "service unreachable or returned an error",
            FailureKind::Parse => "service answered with unexpected data",
            FailureKind::ShapeMismatch => "service answered with too few entries",
        };
        format!("{}: {hint} ({})", self.trigger, self.kind.label())
    }
}
