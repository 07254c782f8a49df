//! Draft lifecycle state machine.
//!
//! A session's draft moves through these phases per conversation:
//! - `Empty`: no draft activity yet
//! - `Drafting`: an utterance is being folded into the draft
//! - `Blocked`: validation failed, awaiting more input
//! - `Complete`: validation passed, finalization runs
//!
//! Finalization transitions `Complete` back to `Empty` for the next
//! conversation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::invoice::ValidationReport;

/// The lifecycle phase of one session's draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    /// No draft exists for the session.
    #[default]
    Empty,

    /// An utterance is currently being merged into the draft.
    Drafting,

    /// Required fields are missing; the session waits for more input.
    Blocked,

    /// All required fields present; the draft finalizes now.
    Complete,
}

impl DraftPhase {
    /// Phase reached after validating an updated draft.
    pub fn after_validation(report: &ValidationReport) -> Self {
        if report.is_complete() {
            DraftPhase::Complete
        } else {
            DraftPhase::Blocked
        }
    }

    /// True while the session still holds a mutable draft.
    pub fn holds_draft(&self) -> bool {
        matches!(self, DraftPhase::Drafting | DraftPhase::Blocked)
    }
}

impl StateMachine for DraftPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DraftPhase::*;
        matches!(
            (self, target),
            // First invoice-relevant utterance opens a draft
            (Empty, Drafting) |
            // Validation outcome
            (Drafting, Blocked) |
            (Drafting, Complete) |
            // Further input resumes drafting
            (Blocked, Drafting) |
            // Finalization resets the session
            (Complete, Empty)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DraftPhase::*;
        match self {
            Empty => vec![Drafting],
            Drafting => vec![Blocked, Complete],
            Blocked => vec![Drafting],
            Complete => vec![Empty],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::MissingField;

    #[test]
    fn default_phase_is_empty() {
        assert_eq!(DraftPhase::default(), DraftPhase::Empty);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&DraftPhase::Drafting).unwrap();
        assert_eq!(json, "\"drafting\"");
    }

    #[test]
    fn after_validation_maps_missing_fields_to_blocked() {
        let blocked = ValidationReport {
            missing: vec![MissingField::CustomerEmail],
            suggestions: vec![],
        };
        let complete = ValidationReport {
            missing: vec![],
            suggestions: vec![],
        };
        assert_eq!(DraftPhase::after_validation(&blocked), DraftPhase::Blocked);
        assert_eq!(DraftPhase::after_validation(&complete), DraftPhase::Complete);
    }

    #[test]
    fn full_lifecycle_walks_without_error() {
        let phase = DraftPhase::Empty
            .transition_to(DraftPhase::Drafting)
            .and_then(|p| p.transition_to(DraftPhase::Blocked))
            .and_then(|p| p.transition_to(DraftPhase::Drafting))
            .and_then(|p| p.transition_to(DraftPhase::Complete))
            .and_then(|p| p.transition_to(DraftPhase::Empty));
        assert_eq!(phase, Ok(DraftPhase::Empty));
    }

    #[test]
    fn empty_cannot_jump_straight_to_complete() {
        assert!(DraftPhase::Empty
            .transition_to(DraftPhase::Complete)
            .is_err());
    }

    #[test]
    fn no_phase_is_terminal() {
        for phase in [
            DraftPhase::Empty,
            DraftPhase::Drafting,
            DraftPhase::Blocked,
            DraftPhase::Complete,
        ] {
            assert!(!phase.is_terminal());
        }
    }

    #[test]
    fn only_drafting_and_blocked_hold_a_draft() {
        assert!(!DraftPhase::Empty.holds_draft());
        assert!(DraftPhase::Drafting.holds_draft());
        assert!(DraftPhase::Blocked.holds_draft());
        assert!(!DraftPhase::Complete.holds_draft());
    }
}
