use crate::{HappinessIndex, Session};

/// Trait for front-ends that present a session to the user.
///
/// A front-end renders the active question or the result, turns user
/// gestures into session transitions, shows rejected transitions inline, and
/// offers a restart. It re-renders after every transition.
pub trait Frontend {
    /// The error type for this front-end.
    type Error: Into<anyhow::Error>;

    /// Drive `session` until the user is finished.
    ///
    /// # Returns
    /// * `Ok(Some(index))` with the last computed score
    /// * `Ok(None)` if the user quit before completing a calculation
    /// * `Err` on cancellation or front-end failure
    fn run(&self, session: &mut Session) -> Result<Option<HappinessIndex>, Self::Error>;

    /// Check if `err` means the user cancelled rather than a failure.
    fn is_cancelled(_err: &Self::Error) -> bool {
        false
    }
}

/// Error type for running a front-end through [`run_frontend`].
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// User cancelled (Ctrl+C, Esc, closed window, etc.)
    #[error("Calculation cancelled by user")]
    Cancelled,

    /// Front-end specific failure (I/O, terminal, prompt library).
    #[error("Frontend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl FrontendError {
    /// Create a front-end error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Run `frontend` on `session`, folding its error into [`FrontendError`].
///
/// Errors the front-end reports through [`Frontend::is_cancelled`] become
/// [`FrontendError::Cancelled`].
pub fn run_frontend<F: Frontend>(
    frontend: &F,
    session: &mut Session,
) -> Result<Option<HappinessIndex>, FrontendError> {
    frontend.run(session).map_err(|err| {
        if F::is_cancelled(&err) {
            FrontendError::Cancelled
        } else {
            FrontendError::backend(err)
        }
    })
}
