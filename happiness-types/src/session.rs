use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    AgeGroup, Catalog, Classification, HappinessIndex, KeypadBuffer, QuestionDef, QuestionSet,
    SessionError,
};

/// How numeric answers are entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryMode {
    /// On-screen keypad building a digit buffer; parsed and range-checked on
    /// submit.
    #[default]
    Keypad,
    /// A numeric control that only yields integers within the question's
    /// range.
    Bounded,
}

impl fmt::Display for EntryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keypad => f.write_str("keypad"),
            Self::Bounded => f.write_str("bounded"),
        }
    }
}

impl FromStr for EntryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keypad" => Ok(Self::Keypad),
            "bounded" => Ok(Self::Bounded),
            other => Err(format!(
                "unknown entry mode '{other}', expected keypad or bounded"
            )),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Grouped catalog, no group chosen yet.
    SelectingGroup,
    /// Waiting for the answer at the current position.
    Answering,
    /// All questions answered and the score computed.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectingGroup => f.write_str("selecting a group"),
            Self::Answering => f.write_str("answering questions"),
            Self::Complete => f.write_str("the calculation is complete"),
        }
    }
}

/// State of one questionnaire run.
///
/// A session is owned by exactly one front-end. Every transition either
/// succeeds or returns a [`SessionError`] and leaves the session untouched.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    entry: EntryMode,
    group: Option<AgeGroup>,
    position: usize,
    answers: Vec<i64>,
    keypad: KeypadBuffer,
    score: Option<HappinessIndex>,
}

impl Session {
    /// Create a fresh session at its defaults.
    pub fn new(catalog: Catalog, entry: EntryMode) -> Self {
        Self {
            catalog,
            entry,
            group: None,
            position: 0,
            answers: Vec::new(),
            keypad: KeypadBuffer::new(),
            score: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn entry(&self) -> EntryMode {
        self.entry
    }

    pub fn phase(&self) -> Phase {
        if self.score.is_some() {
            Phase::Complete
        } else if self.catalog.is_grouped() && self.group.is_none() {
            Phase::SelectingGroup
        } else {
            Phase::Answering
        }
    }

    pub fn group(&self) -> Option<AgeGroup> {
        self.group
    }

    /// The question set in use, once it is known.
    pub fn question_set(&self) -> Option<&QuestionSet> {
        self.catalog.questions(self.group).ok()
    }

    /// The question awaiting an answer (`None` outside [`Phase::Answering`]).
    pub fn current_question(&self) -> Option<&QuestionDef> {
        if self.phase() != Phase::Answering {
            return None;
        }
        self.question_set()?.get(self.position)
    }

    /// 1-based number of the current question and the total count.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.current_question()?;
        let total = self.question_set()?.len();
        Some((self.position + 1, total))
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn answers(&self) -> &[i64] {
        &self.answers
    }

    pub fn keypad(&self) -> &KeypadBuffer {
        &self.keypad
    }

    pub fn pending_input(&self) -> &str {
        self.keypad.as_str()
    }

    pub fn is_done(&self) -> bool {
        self.score.is_some()
    }

    pub fn score(&self) -> Option<HappinessIndex> {
        self.score
    }

    pub fn classification(&self) -> Option<Classification> {
        self.score.map(HappinessIndex::classification)
    }

    /// Choose the age group and start answering.
    pub fn select_group(&mut self, group: Option<AgeGroup>) -> Result<(), SessionError> {
        self.require(Phase::SelectingGroup, "select_group")?;
        let group = group.ok_or(SessionError::InvalidGroupSelection)?;
        if self.catalog.questions(Some(group)).is_err() {
            return Err(SessionError::UnknownGroup(group));
        }

        self.reset();
        self.group = Some(group);
        tracing::debug!(%group, "group selected");
        Ok(())
    }

    /// Press a digit key. Returns `false` when the buffer was full and the
    /// key was ignored.
    pub fn append_digit(&mut self, digit: u8) -> Result<bool, SessionError> {
        self.require_keypad("append_digit")?;
        self.require(Phase::Answering, "append_digit")?;
        let accepted = self.keypad.push(digit)?;
        if !accepted {
            tracing::debug!(digit, "keypad buffer full, digit ignored");
        }
        Ok(accepted)
    }

    /// Press the delete key. Does nothing on an empty buffer.
    pub fn delete_last_digit(&mut self) -> Result<(), SessionError> {
        self.require_keypad("delete_last_digit")?;
        self.require(Phase::Answering, "delete_last_digit")?;
        self.keypad.pop();
        Ok(())
    }

    /// Press the clear key.
    pub fn clear_input(&mut self) -> Result<(), SessionError> {
        self.require_keypad("clear_input")?;
        self.require(Phase::Answering, "clear_input")?;
        self.keypad.clear();
        Ok(())
    }

    /// Submit the keypad buffer as the answer to the current question.
    ///
    /// On failure the buffer is kept so the user can correct it.
    pub fn submit_answer(&mut self) -> Result<(), SessionError> {
        self.require_keypad("submit_answer")?;
        self.require(Phase::Answering, "submit_answer")?;
        let value = self.keypad.parse().inspect_err(|err| {
            tracing::debug!(input = self.keypad.as_str(), %err, "keypad input rejected");
        })?;
        self.record(value)
    }

    /// Submit an integer as the answer to the current question.
    pub fn submit_value(&mut self, value: i64) -> Result<(), SessionError> {
        self.require(Phase::Answering, "submit_value")?;
        self.record(value)
    }

    /// Discard everything and start over.
    pub fn restart(&mut self) {
        self.reset();
        self.group = None;
        tracing::debug!("session restarted");
    }

    fn record(&mut self, value: i64) -> Result<(), SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::InvalidStateTransition {
                transition: "submit_value",
                phase: self.phase(),
            });
        };
        if !question.accepts(value) {
            let err = SessionError::OutOfRange {
                value,
                min: question.min,
                max: question.max,
            };
            tracing::debug!(value, %err, "answer rejected");
            return Err(err);
        }

        self.answers.push(value);
        self.keypad.clear();
        self.position += 1;
        tracing::debug!(position = self.position, value, "answer recorded");

        let Some(set) = self.question_set() else {
            return Ok(());
        };
        if self.position == set.len() {
            let score = HappinessIndex::compute(set.iter().zip(self.answers.iter().copied()));
            tracing::info!(score = score.value(), group = ?self.group, "happiness index computed");
            self.score = Some(score);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.position = 0;
        self.answers.clear();
        self.keypad.clear();
        self.score = None;
    }

    fn require(&self, expected: Phase, transition: &'static str) -> Result<(), SessionError> {
        let phase = self.phase();
        if phase == expected {
            Ok(())
        } else {
            tracing::debug!(transition, %phase, "transition rejected");
            Err(SessionError::InvalidStateTransition { transition, phase })
        }
    }

    fn require_keypad(&self, transition: &'static str) -> Result<(), SessionError> {
        match self.entry {
            EntryMode::Keypad => Ok(()),
            EntryMode::Bounded => Err(SessionError::KeypadDisabled { transition }),
        }
    }
}
