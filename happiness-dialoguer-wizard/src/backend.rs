//! Dialoguer front-end implementation for the Frontend trait.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use happiness::{
    AgeGroup, Frontend, HappinessIndex, Phase, QuestionDef, Session, SessionError,
};
use thiserror::Error;

/// Error type for the Dialoguer front-end.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the calculation (e.g., pressed Ctrl+C or Escape).
    #[error("Calculation cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer wizard for interactive CLI prompts.
///
/// Each question is a number input bounded to the question's range, so only
/// valid integers ever reach the session.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with the default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with the plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn ask_group(&self, session: &mut Session) -> Result<(), DialoguerError> {
        let groups = session.catalog().groups();
        let names: Vec<&str> = groups.iter().map(|g| g.name()).collect();

        let _theme;
        let builder: Select;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        let choice = builder
            .with_prompt("Who are you?")
            .items(&names)
            .interact_opt()
            .map_err(prompt_error)?;

        let group: Option<AgeGroup> = choice.and_then(|idx| groups.get(idx).copied());
        report(session.select_group(group));
        Ok(())
    }

    fn ask_question(&self, session: &mut Session) -> Result<(), DialoguerError> {
        let Some(question) = session.current_question().cloned() else {
            return Ok(());
        };
        if let Some((number, total)) = session.progress() {
            println!("\nQuestion {number} of {total}");
        }

        let _theme;
        let builder: Input<i64>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        let bounds = question.clone();
        let value = builder
            .with_prompt(question_prompt(&question))
            .default(question.min)
            .validate_with(move |value: &i64| check_bounds(&bounds, *value))
            .interact_text()
            .map_err(prompt_error)?;

        report(session.submit_value(value));
        Ok(())
    }

    fn show_result(&self, score: HappinessIndex) -> Result<bool, DialoguerError> {
        println!("\n{}", result_text(score));

        let _theme;
        let builder: Confirm;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }

        builder
            .with_prompt("Start a new calculation?")
            .default(false)
            .interact()
            .map_err(prompt_error)
    }
}

/// Print a rejected transition the way the other prompts print errors.
fn report(result: Result<(), SessionError>) {
    if let Some(message) = inline_message(result) {
        println!("{message}");
    }
}

/// The inline text for a rejected transition. Contract violations are only
/// logged.
fn inline_message(result: Result<(), SessionError>) -> Option<String> {
    let err = result.err()?;
    if err.is_user_facing() {
        tracing::debug!(%err, "transition rejected");
        Some(format!("Error: {err}"))
    } else {
        tracing::warn!(%err, "front-end issued an invalid transition");
        None
    }
}

/// Input validator keeping out-of-range values away from the session.
fn check_bounds(question: &QuestionDef, value: i64) -> Result<(), String> {
    if question.accepts(value) {
        Ok(())
    } else {
        Err(SessionError::OutOfRange {
            value,
            min: question.min,
            max: question.max,
        }
        .to_string())
    }
}

fn question_prompt(question: &QuestionDef) -> String {
    format!("{} {}", question.prompt(), question.range_text())
}

fn result_text(score: HappinessIndex) -> String {
    let class = score.classification();
    format!(
        "{}  Happiness Index: {score}\n   {}",
        class.emoji, class.message
    )
}

impl Frontend for DialoguerWizard {
    type Error = DialoguerError;

    fn run(&self, session: &mut Session) -> Result<Option<HappinessIndex>, Self::Error> {
        let mut last_score = None;

        loop {
            match session.phase() {
                Phase::SelectingGroup => self.ask_group(session)?,
                Phase::Answering => self.ask_question(session)?,
                Phase::Complete => {
                    let Some(score) = session.score() else {
                        break;
                    };
                    last_score = Some(score);
                    if self.show_result(score)? {
                        session.restart();
                    } else {
                        break;
                    }
                }
            }
        }

        Ok(last_score)
    }

    fn is_cancelled(err: &Self::Error) -> bool {
        matches!(err, DialoguerError::Cancelled)
    }
}
