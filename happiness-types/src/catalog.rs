use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CatalogError, QuestionDef, QuestionSet};

/// Selector choosing which question set applies in a grouped catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    Kid,
    Student,
    Adult,
}

impl AgeGroup {
    /// All groups in display order.
    pub const ALL: [AgeGroup; 3] = [AgeGroup::Kid, AgeGroup::Student, AgeGroup::Adult];

    pub fn name(self) -> &'static str {
        match self {
            Self::Kid => "Kid",
            Self::Student => "Student",
            Self::Adult => "Adult",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown group '{s}', expected one of Kid, Student, Adult"))
    }
}

/// The static question data for a session.
///
/// A catalog is either a single question set, or a mapping from age group
/// to question set. It's presentation-agnostic and immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Catalog {
    /// One question set for everybody.
    Single { questions: QuestionSet },

    /// One question set per age group; a group must be chosen first.
    Grouped { groups: BTreeMap<AgeGroup, QuestionSet> },
}

impl Catalog {
    /// Create a catalog with a single question set.
    pub fn single(questions: QuestionSet) -> Self {
        Self::Single { questions }
    }

    /// Create a grouped catalog. At least one group is required.
    pub fn grouped(
        groups: impl IntoIterator<Item = (AgeGroup, QuestionSet)>,
    ) -> Result<Self, CatalogError> {
        let groups: BTreeMap<_, _> = groups.into_iter().collect();
        if groups.is_empty() {
            return Err(CatalogError::NoGroups);
        }
        Ok(Self::Grouped { groups })
    }

    /// Check if a group has to be chosen before answering.
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::Grouped { .. })
    }

    /// The selectable groups in display order (empty for a single catalog).
    pub fn groups(&self) -> Vec<AgeGroup> {
        match self {
            Self::Single { .. } => Vec::new(),
            Self::Grouped { groups } => groups.keys().copied().collect(),
        }
    }

    /// Look up the question set to use for `group`.
    ///
    /// A single catalog ignores the group. A grouped catalog requires a
    /// group it contains.
    pub fn questions(&self, group: Option<AgeGroup>) -> Result<&QuestionSet, CatalogError> {
        match self {
            Self::Single { questions } => Ok(questions),
            Self::Grouped { groups } => group
                .and_then(|g| groups.get(&g))
                .ok_or(CatalogError::MissingGroup(group)),
        }
    }

    /// Check that a grouped catalog has at least one group.
    ///
    /// Question sets validate themselves on construction and on
    /// deserialization, so only the group count is left to check here.
    pub fn validate(&self) -> Result<(), CatalogError> {
        match self {
            Self::Grouped { groups } if groups.is_empty() => Err(CatalogError::NoGroups),
            _ => Ok(()),
        }
    }

    /// The fixed five-question catalog.
    pub fn standard() -> Self {
        Self::single(builtin(vec![
            QuestionDef::new("What's your monthly income?", 1000, 25000, 0.25),
            QuestionDef::new("How many hours do you socialize per day?", 0, 10, 0.2),
            QuestionDef::new("How healthy do you feel?", 1, 10, 0.2),
            QuestionDef::new("Hours per day on education?", 2, 10, 0.2),
            QuestionDef::new("Hours of sleep per day?", 2, 12, 0.15),
        ]))
    }

    /// The catalog branching on Kid / Student / Adult.
    pub fn age_groups() -> Self {
        let kid = builtin(vec![
            QuestionDef::new("How many hours do you play daily?", 0, 6, 0.25),
            QuestionDef::new("How happy do you feel at school?", 1, 10, 0.25),
            QuestionDef::new("Do you get enough sleep?", 5, 12, 0.25),
            QuestionDef::new("How much time do you spend with friends?", 0, 6, 0.25),
        ]);
        let student = builtin(vec![
            QuestionDef::new("Hours per day on education?", 2, 10, 0.25),
            QuestionDef::new("How many hours do you socialize?", 0, 6, 0.25),
            QuestionDef::new("How healthy do you feel?", 1, 10, 0.25),
            QuestionDef::new("How many hours do you sleep?", 4, 10, 0.25),
        ]);
        let adult = builtin(vec![
            QuestionDef::new("What's your monthly income?", 1000, 25000, 0.25),
            QuestionDef::new("How many hours do you socialize per day?", 0, 10, 0.2),
            QuestionDef::new("How healthy do you feel?", 1, 10, 0.2),
            QuestionDef::new("Hours of sleep per day?", 2, 12, 0.15),
            QuestionDef::new("Hours per day on education/self-growth?", 0, 8, 0.2),
        ]);

        Self::Grouped {
            groups: BTreeMap::from([
                (AgeGroup::Kid, kid),
                (AgeGroup::Student, student),
                (AgeGroup::Adult, adult),
            ]),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

// Built-in sets skip validation; `builtin_sets_pass_validation` covers them.
fn builtin(questions: Vec<QuestionDef>) -> QuestionSet {
    QuestionSet::trusted(questions)
}
