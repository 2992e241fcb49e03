//! Submission state machine.

use serde::{Deserialize, Serialize};

/// Observable state of the last/current submission attempt.
///
/// Idle → Validating → Submitting → {Succeeded, Failed}. A new call to
/// submit restarts the machine from Validating; once Submitting has begun
/// the attempt runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubmissionState {
    /// No submission attempted yet.
    #[default]
    Idle,
    /// Checking local preconditions; no remote call made.
    Validating,
    /// Remote writes in flight.
    Submitting,
    /// Header and all items written; draft cleared.
    Succeeded,
    /// Attempt stopped; draft left intact for retry.
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }

    /// Whether a submission attempt is currently running.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            SubmissionState::Validating | SubmissionState::Submitting
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight() {
        assert!(SubmissionState::Submitting.is_in_flight());
        assert!(SubmissionState::Validating.is_in_flight());
        assert!(!SubmissionState::Idle.is_in_flight());
        assert!(!SubmissionState::Succeeded.is_in_flight());
        assert!(!SubmissionState::Failed.is_in_flight());
    }
}
