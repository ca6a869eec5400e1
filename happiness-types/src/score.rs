use std::fmt;

use crate::{Classification, QuestionDef};

/// The final 0-10 score, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HappinessIndex(f64);

impl HappinessIndex {
    /// Compute the index from `(question, answer)` pairs.
    ///
    /// Each answer is normalized to `[0, 100]`, multiplied by its weight, and
    /// the weighted values are summed. The total is divided by 10 and rounded
    /// half away from zero to two decimals.
    pub fn compute<'a>(answered: impl IntoIterator<Item = (&'a QuestionDef, i64)>) -> Self {
        Self(round2(weighted_total(answered) / 10.0))
    }

    /// Get the rounded score.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The qualitative tier for this score.
    pub fn classification(self) -> Classification {
        Classification::of(self.0)
    }
}

impl fmt::Display for HappinessIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} / 10", self.0)
    }
}

impl From<HappinessIndex> for f64 {
    fn from(index: HappinessIndex) -> Self {
        index.0
    }
}

/// Sum of normalized answers times their weights, on a 0 to 100 scale.
fn weighted_total<'a>(answered: impl IntoIterator<Item = (&'a QuestionDef, i64)>) -> f64 {
    answered
        .into_iter()
        .map(|(question, value)| question.normalize(value) * question.weight)
        .sum()
}

/// Round half away from zero at two decimal places.
///
/// The tie is decided on the binary `f64`, not on its decimal spelling:
/// `0.145` is stored slightly below the midpoint and rounds to `0.14`,
/// while exact ties such as `0.125` round up to `0.13`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
