use serde::{Deserialize, Serialize};

/// Coarse classification of a failed activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Unknown trigger, or the activation task did not run to completion.
    Binding,
    /// Transport failure or non-success status.
    Network,
    /// Body is not the JSON the render step expects.
    Parse,
    /// Body parsed but is shorter than the render step requires.
    ShapeMismatch,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::Binding => "binding",
            FailureKind::Network => "network",
            FailureKind::Parse => "parse",
            FailureKind::ShapeMismatch => "shape-mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FailureKind;

    #[test]
    fn serializes_kind_as_snake_case() {
        let json = serde_json::to_string(&FailureKind::ShapeMismatch).expect("serialize");
        assert_eq!(json, "\"shape_mismatch\"");
        assert_eq!(FailureKind::ShapeMismatch.label(), "shape-mismatch");
    }
}
