//! Explainable breakdown of the aggregate procrastination score.
//!
//! Each term is an input average times a signed weight. The terms sum to
//! the raw score, which is then clamped to `0..=100` and rounded.

use serde::{Deserialize, Serialize};

use super::round_one_decimal;

/// Upper bound of the aggregate score.
pub const MAX_PROCRASTINATION_SCORE: f64 = 100.0;

/// One weighted input of the aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerm {
    /// Term name
    pub name: String,
    /// Mean of the underlying input (or its default)
    pub average: f64,
    /// Signed weight; negative terms lower the score
    pub weight: f64,
    /// `average * weight`
    pub contribution: f64,
}

impl ScoreTerm {
    pub fn new(name: impl Into<String>, average: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            average,
            weight,
            contribution: average * weight,
        }
    }
}

/// Complete scoring breakdown for explainability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub terms: Vec<ScoreTerm>,
    /// Sum of contributions before clamping
    pub raw: f64,
    /// Clamped and rounded score
    pub score: f64,
}

impl ScoreBreakdown {
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
            raw: 0.0,
            score: 0.0,
        }
    }

    /// Add a term and refresh the totals.
    pub fn add_term(&mut self, term: ScoreTerm) {
        self.raw += term.contribution;
        self.terms.push(term);
        self.score = round_one_decimal(self.raw.clamp(0.0, MAX_PROCRASTINATION_SCORE));
    }

    /// Term pushing the score up the most, if any pushes it up at all.
    pub fn top_driver(&self) -> Option<&ScoreTerm> {
        self.terms
            .iter()
            .filter(|t| t.contribution > 0.0)
            .max_by(|a, b| a.contribution.total_cmp(&b.contribution))
    }

    pub fn term(&self, name: &str) -> Option<&ScoreTerm> {
        self.terms.iter().find(|t| t.name == name)
    }
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self::new()
    }
}
