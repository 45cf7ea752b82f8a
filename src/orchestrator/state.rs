use serde::{Deserialize, Serialize};

/// Lifecycle of a single prediction attempt.
///
/// `Idle -> Validating -> Requesting -> (Succeeded | Failed) -> Idle`, with
/// `Validating -> Failed` when the input is rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrchestratorState {
    #[default]
    Idle,
    Validating,
    Requesting,
    Succeeded,
    Failed,
}

impl OrchestratorState {
    pub fn can_transition_to(self, next: OrchestratorState) -> bool {
        use OrchestratorState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Failed)
                | (Validating, Requesting)
                | (Requesting, Failed)
                | (Requesting, Succeeded)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::OrchestratorState::*;

    #[test]
    fn test_allowed_transitions() {
        assert!(Idle.can_transition_to(Validating));
        assert!(Validating.can_transition_to(Failed));
        assert!(Requesting.can_transition_to(Succeeded));
        assert!(Failed.can_transition_to(Idle));

        assert!(!Idle.can_transition_to(Requesting));
        assert!(!Validating.can_transition_to(Succeeded));
        assert!(!Succeeded.can_transition_to(Requesting));
    }
}
