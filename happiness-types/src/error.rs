use crate::{AgeGroup, Phase};

/// Error type for session transitions.
///
/// Every variant is recoverable: a failed transition leaves the session
/// exactly as it was, so the user can correct the input and retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// The keypad buffer (or a pressed key) is not a base-10 integer.
    #[error("Please enter a valid number")]
    InvalidFormat { input: String },

    /// The value falls outside the current question's range.
    #[error("Please enter a number between {min} and {max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Group selection was confirmed without choosing a group.
    #[error("Please select a group to start")]
    InvalidGroupSelection,

    /// The chosen group has no question set in the active catalog.
    #[error("No questions are defined for the {0} group")]
    UnknownGroup(AgeGroup),

    /// A keypad transition was invoked on a session using bounded entry.
    #[error("`{transition}` needs keypad entry")]
    KeypadDisabled { transition: &'static str },

    /// A transition was invoked in a phase that does not allow it.
    #[error("`{transition}` is not allowed while {phase}")]
    InvalidStateTransition {
        transition: &'static str,
        phase: Phase,
    },
}

impl SessionError {
    /// Check if this error is a user-facing input problem (as opposed to a
    /// front-end calling a transition at the wrong time).
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::InvalidStateTransition { .. } | Self::KeypadDisabled { .. }
        )
    }
}

/// Error type for building question sets and catalogs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("A question set must contain at least one question")]
    Empty,

    #[error("Question {index}: min ({min}) must be less than max ({max})")]
    InvalidRange { index: usize, min: i64, max: i64 },

    #[error("Question {index}: weight must be positive, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("Question weights must sum to 1.0, but sum to {sum:.3}")]
    WeightSum { sum: f64 },

    #[error("A grouped catalog needs at least one group")]
    NoGroups,

    /// Grouped catalog queried without a group, or with one it lacks.
    #[error("No question set for group {0:?}")]
    MissingGroup(Option<AgeGroup>),
}
