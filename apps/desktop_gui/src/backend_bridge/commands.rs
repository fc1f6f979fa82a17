//! Backend commands queued from UI to backend worker.

use shared::domain::TriggerId;
use view_binder::InputSnapshot;

pub enum BackendCommand {
    /// A trigger was clicked; `inputs` holds the text inputs as they were at that moment.
    Activate {
        trigger: TriggerId,
        inputs: InputSnapshot,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Activate { .. } => "activate",
        }
    }
}
