//! Scripted front-end for running sessions without user interaction.
//!
//! `ScriptedFrontend` replays a fixed list of user gestures against a
//! session. Rejected gestures are recorded the way an interactive front-end
//! would show them inline, so tests can assert on both the score and the
//! messages the user would have seen.
//!
//! # Example
//!
//! ```rust
//! use happiness::{Catalog, EntryMode, Frontend, ScriptedFrontend, Session};
//!
//! let mut session = Session::new(Catalog::standard(), EntryMode::Keypad);
//! let score = ScriptedFrontend::new()
//!     .keypad_answer("13000")
//!     .keypad_answer("5")
//!     .keypad_answer("7")
//!     .keypad_answer("6")
//!     .keypad_answer("8")
//!     .run(&mut session)
//!     .unwrap();
//!
//! assert_eq!(score.map(|s| s.value()), Some(5.48));
//! ```

use happiness_types::{AgeGroup, Frontend, HappinessIndex, Session, SessionError};

/// A single user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Confirm the group choice (`None` when nothing was picked).
    SelectGroup(Option<AgeGroup>),
    /// Press a keypad digit.
    Digit(u8),
    /// Press the delete key.
    Delete,
    /// Press the clear key.
    Clear,
    /// Submit the keypad buffer.
    Submit,
    /// Submit a value from a bounded control.
    Value(i64),
    /// Start a new calculation.
    Restart,
}

/// What the user would have seen during a scripted run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    /// Rejected steps, by index into the script, with the inline message.
    pub rejections: Vec<(usize, SessionError)>,

    /// Every score computed during the run, in order.
    pub scores: Vec<HappinessIndex>,
}

impl Transcript {
    /// The last computed score, if any calculation completed.
    pub fn last_score(&self) -> Option<HappinessIndex> {
        self.scores.last().copied()
    }

    /// The inline messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.rejections
            .iter()
            .map(|(_, err)| err.to_string())
            .collect()
    }
}

/// Error type for ScriptedFrontend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Step {index} ({step:?}) was rejected: {source}")]
    Rejected {
        index: usize,
        step: Step,
        #[source]
        source: SessionError,
    },
}

/// A front-end that replays pre-configured gestures.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    steps: Vec<Step>,
    strict: bool,
}

impl ScriptedFrontend {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the first rejected step instead of recording it.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Append a step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps.
    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Confirm a group choice.
    pub fn select_group(self, group: AgeGroup) -> Self {
        self.step(Step::SelectGroup(Some(group)))
    }

    /// Press one digit key per character of `digits`. Non-digit characters
    /// are sent as out-of-range key codes, which the session rejects.
    pub fn digits(self, digits: &str) -> Self {
        let keys = digits
            .chars()
            .map(|c| Step::Digit(c.to_digit(10).map_or(u8::MAX, |d| d as u8)));
        self.steps(keys)
    }

    /// Type `digits` on the keypad and submit.
    pub fn keypad_answer(self, digits: &str) -> Self {
        self.digits(digits).step(Step::Submit)
    }

    /// Submit a value from a bounded control.
    pub fn value(self, value: i64) -> Self {
        self.step(Step::Value(value))
    }

    /// Start a new calculation.
    pub fn restart(self) -> Self {
        self.step(Step::Restart)
    }

    /// Replay the script against `session`.
    pub fn play(&self, session: &mut Session) -> Result<Transcript, ScriptError> {
        let mut transcript = Transcript::default();

        for (index, step) in self.steps.iter().copied().enumerate() {
            let was_done = session.is_done();
            let result = match step {
                Step::SelectGroup(group) => session.select_group(group),
                Step::Digit(digit) => session.append_digit(digit).map(|_| ()),
                Step::Delete => session.delete_last_digit(),
                Step::Clear => session.clear_input(),
                Step::Submit => session.submit_answer(),
                Step::Value(value) => session.submit_value(value),
                Step::Restart => {
                    session.restart();
                    Ok(())
                }
            };

            match result {
                Ok(()) => {
                    if !was_done && let Some(score) = session.score() {
                        transcript.scores.push(score);
                    }
                }
                Err(source) if self.strict => {
                    return Err(ScriptError::Rejected {
                        index,
                        step,
                        source,
                    });
                }
                Err(source) => {
                    tracing::debug!(index, ?step, %source, "scripted step rejected");
                    transcript.rejections.push((index, source));
                }
            }
        }

        Ok(transcript)
    }
}

impl Frontend for ScriptedFrontend {
    type Error = ScriptError;

    fn run(&self, session: &mut Session) -> Result<Option<HappinessIndex>, Self::Error> {
        self.play(session).map(|transcript| transcript.last_score())
    }
}
