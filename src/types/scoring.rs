use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    A,
    B,
    C,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted sub-scores of the three layers, each on the 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerScores {
    pub lighting: Score,
    pub material: Score,
    pub spatial: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiredRule {
    pub id: String,
    pub title: String,
    pub points: u32,
}

/// Why a rule predicate could not be evaluated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum PredicateFault {
    #[error("predicate references unknown attribute: {0}")]
    UnknownField(String),

    #[error("predicate contains an empty '{0}' group")]
    EmptyGroup(&'static str),

    #[error("predicate nesting exceeds {0} levels")]
    TooDeep(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFault {
    pub rule_id: String,
    pub fault: PredicateFault,
}

/// Result of one scoring pass. Recomputed from scratch on every
/// evaluation, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub layers: LayerScores,
    pub base: Score,
    pub adjust: u32,
    #[serde(rename = "final")]
    pub final_score: Score,
    pub grade: Grade,
    pub fired: Vec<FiredRule>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<RuleFault>,
}
