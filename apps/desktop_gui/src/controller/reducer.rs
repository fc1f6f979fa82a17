//! Applies backend events to the state the UI draws from.

use std::collections::HashMap;

use shared::domain::TargetId;

use crate::controller::events::{UiError, UiEvent};

#[derive(Debug, Default)]
pub struct ViewState {
    texts: HashMap<TargetId, String>,
    pub status: String,
    pub last_failure: Option<UiError>,
    pub in_flight: usize,
}

impl ViewState {
    pub fn text(&self, target: &TargetId) -> Option<&str> {
        self.texts.get(target).map(String::as_str)
    }

    pub fn activation_queued(&mut self) {
        self.in_flight += 1;
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::TargetUpdated { target, text } => {
                self.texts.insert(target, text);
            }
            UiEvent::ActivationFinished { trigger, written } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.status = format!("{trigger}: updated {written} fields");
            }
            UiEvent::ActivationFailed(err) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                tracing::warn!(
                    trigger = %err.trigger(),
                    kind = err.kind().label(),
                    "activation failed: {}",
                    err.message()
                );
                self.status = err.status_line();
                self.last_failure = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::{domain::TriggerId, error::FailureKind};
    use view_binder::BindError;

    use super::*;

    #[test]
    fn target_updates_replace_text() {
        let mut state = ViewState::default();
        let target = TargetId::from("my_session_id");
        state.apply(UiEvent::TargetUpdated {
            target: target.clone(),
            text: "Session ID:  a".to_string(),
        });
        state.apply(UiEvent::TargetUpdated {
            target: target.clone(),
            text: "Session ID:  b".to_string(),
        });

        assert_eq!(state.text(&target), Some("Session ID:  b"));
    }

    #[test]
    fn failure_keeps_rendered_text_and_sets_status() {
        let mut state = ViewState::default();
        let target = TargetId::from("lyrics");
        state.apply(UiEvent::TargetUpdated {
            target: target.clone(),
            text: "la la la".to_string(),
        });
        state.activation_queued();

        let err = BindError::UnknownTrigger("search".to_string());
        state.apply(UiEvent::ActivationFailed(UiError::from_bind_error(
            TriggerId::from("search"),
            &err,
        )));

        assert_eq!(state.text(&target), Some("la la la"));
        assert_eq!(state.in_flight, 0);
        assert_eq!(
            state.last_failure.as_ref().map(UiError::kind),
            Some(FailureKind::Binding)
        );
        assert!(state.status.starts_with("search:"));
    }

    #[test]
    fn finished_activation_reports_written_count() {
        let mut state = ViewState::default();
        state.activation_queued();
        state.activation_queued();
        state.apply(UiEvent::ActivationFinished {
            trigger: TriggerId::from("get_playlist"),
            written: 20,
        });

        assert_eq!(state.in_flight, 1);
        assert_eq!(state.status, "get_playlist: updated 20 fields");
    }
}
