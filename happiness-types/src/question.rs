use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Tolerance used when checking that a question set's weights sum to 1.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// A single numeric question with an inclusive answer range and a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDef {
    /// The prompt text shown to the user.
    pub prompt: String,

    /// Smallest accepted answer.
    pub min: i64,

    /// Largest accepted answer.
    pub max: i64,

    /// Contribution of this question to the final score.
    pub weight: f64,
}

impl QuestionDef {
    /// Create a new question.
    pub fn new(prompt: impl Into<String>, min: i64, max: i64, weight: f64) -> Self {
        Self {
            prompt: prompt.into(),
            min,
            max,
            weight,
        }
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Check if `value` lies within `[min, max]`.
    pub fn accepts(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// The range as displayed next to the prompt, e.g. `(1-10)`.
    pub fn range_text(&self) -> String {
        format!("({}-{})", self.min, self.max)
    }

    /// Linear rescaling of `value` from `[min, max]` to `[0, 100]`.
    ///
    /// Offsets are taken in `i128` so any `i64` range has a non-zero span.
    pub fn normalize(&self, value: i64) -> f64 {
        let offset = i128::from(value) - i128::from(self.min);
        let span = i128::from(self.max) - i128::from(self.min);
        offset as f64 / span as f64 * 100.0
    }

    fn check(&self, index: usize) -> Result<(), CatalogError> {
        if self.min >= self.max {
            return Err(CatalogError::InvalidRange {
                index,
                min: self.min,
                max: self.max,
            });
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(CatalogError::InvalidWeight {
                index,
                weight: self.weight,
            });
        }
        Ok(())
    }
}

/// An ordered, validated, non-empty list of questions.
///
/// Construction checks every question's range and weight and requires the
/// weights to sum to 1 (within [`WEIGHT_SUM_TOLERANCE`]), which keeps the
/// computed index on a 0 to 10 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<QuestionDef>,
}

impl QuestionSet {
    /// Validate and wrap a list of questions.
    pub fn new(questions: Vec<QuestionDef>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, question) in questions.iter().enumerate() {
            question.check(index)?;
        }
        let sum: f64 = questions.iter().map(|q| q.weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CatalogError::WeightSum { sum });
        }
        Ok(Self { questions })
    }

    pub(crate) fn trusted(questions: Vec<QuestionDef>) -> Self {
        Self { questions }
    }

    /// Get the questions.
    pub fn questions(&self) -> &[QuestionDef] {
        &self.questions
    }

    /// Get the question at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&QuestionDef> {
        self.questions.get(index)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the set has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionDef> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionDef;
    type IntoIter = std::slice::Iter<'a, QuestionDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

impl<'de> Deserialize<'de> for QuestionSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let questions = Vec::<QuestionDef>::deserialize(deserializer)?;
        QuestionSet::new(questions).map_err(serde::de::Error::custom)
    }
}
