//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Returns whether the command reached the backend queue.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui command queue full");
            *status = "UI command queue is full; please retry".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend worker disconnected");
            *status = "Backend worker disconnected (possible startup/runtime failure)".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::TriggerId;
    use view_binder::InputSnapshot;

    use super::*;

    fn activate(trigger: &str) -> BackendCommand {
        BackendCommand::Activate {
            trigger: TriggerId::from(trigger),
            inputs: InputSnapshot::new(),
        }
    }

    #[test]
    fn queued_command_leaves_status_alone() {
        let (tx, rx) = bounded(1);
        let mut status = "idle".to_string();
        assert!(dispatch_backend_command(&tx, activate("get_p1"), &mut status));

        assert_eq!(status, "idle");
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendCommand::Activate { trigger, .. }) if trigger.as_str() == "get_p1"
        ));
    }

    #[test]
    fn full_and_disconnected_queues_set_status() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, activate("get_p1"), &mut status));
        assert!(!dispatch_backend_command(&tx, activate("get_p2"), &mut status));
        assert_eq!(status, "UI command queue is full; please retry");

        drop(rx);
        assert!(!dispatch_backend_command(&tx, activate("get_p3"), &mut status));
        assert!(status.starts_with("Backend worker disconnected"));
    }
}
