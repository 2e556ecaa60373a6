//! Behavioral pattern detection.
//!
//! Each rule runs independently and appends at most one pattern, so the
//! output order is the rule order below, not a ranking.
//!
//! 1. `high_postponement`: some behavior was postponed more than 3 times
//! 2. `time_sensitivity`: always emitted, a fixed placeholder insight
//! 3. `category_sensitivity`: more than half of the tasks are work tasks
//! 4. `mood_correlation`: at least one journal entry exists

use serde::{Deserialize, Serialize};

use crate::records::{BehaviorRecord, JournalEntry, Task};

/// Postpone counts above this trigger `high_postponement`.
pub const POSTPONE_THRESHOLD: u32 = 3;

/// Share of work tasks that must be exceeded for `category_sensitivity`.
pub const WORK_SHARE_THRESHOLD: f64 = 0.5;

/// Pattern type tag.
///
/// Tags the detector does not know are kept verbatim in `Other`, so a
/// pattern list from a newer producer survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PatternKind {
    HighPostponement,
    TimeSensitivity,
    CategorySensitivity,
    MoodCorrelation,
    Other(String),
}

impl PatternKind {
    pub fn as_str(&self) -> &str {
        match self {
            PatternKind::HighPostponement => "high_postponement",
            PatternKind::TimeSensitivity => "time_sensitivity",
            PatternKind::CategorySensitivity => "category_sensitivity",
            PatternKind::MoodCorrelation => "mood_correlation",
            PatternKind::Other(tag) => tag,
        }
    }
}

impl From<String> for PatternKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "high_postponement" => PatternKind::HighPostponement,
            "time_sensitivity" => PatternKind::TimeSensitivity,
            "category_sensitivity" => PatternKind::CategorySensitivity,
            "mood_correlation" => PatternKind::MoodCorrelation,
            _ => PatternKind::Other(tag),
        }
    }
}

impl From<PatternKind> for String {
    fn from(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected behavioral tendency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    #[serde(rename = "type")]
    pub kind: PatternKind,
    pub description: String,
}

impl Pattern {
    pub fn new(kind: PatternKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// Stateless pattern detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDetector;

impl PatternDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn identify_patterns(
        &self,
        tasks: &[Task],
        journals: &[JournalEntry],
        behaviors: &[BehaviorRecord],
    ) -> Vec<Pattern> {
        let mut patterns = Vec::new();

        if behaviors.iter().any(|b| b.postpone_count > POSTPONE_THRESHOLD) {
            patterns.push(Pattern::new(
                PatternKind::HighPostponement,
                "You frequently postpone tasks multiple times",
            ));
        }

        // Placeholder until session timestamps are analyzed.
        patterns.push(Pattern::new(
            PatternKind::TimeSensitivity,
            "You tend to be more productive in the morning",
        ));

        let work_tasks = tasks.iter().filter(|t| t.is_work()).count();
        if work_tasks as f64 > tasks.len() as f64 * WORK_SHARE_THRESHOLD {
            patterns.push(Pattern::new(
                PatternKind::CategorySensitivity,
                "You procrastinate more on work-related tasks",
            ));
        }

        // Placeholder: journal content is not correlated yet, presence is enough.
        if !journals.is_empty() {
            patterns.push(Pattern::new(
                PatternKind::MoodCorrelation,
                "Your procrastination increases when your mood score is below 4",
            ));
        }

        tracing::debug!(count = patterns.len(), "patterns identified");
        patterns
    }
}
