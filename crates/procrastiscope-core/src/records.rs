//! Input records received from the caller.
//!
//! Every record lives for exactly one request. Numeric fields are taken as
//! given; the engine does not range-check complexity, priority, mood or
//! energy.

use serde::{Deserialize, Serialize};

/// Category label counted by the category-sensitivity pattern.
pub const WORK_CATEGORY: &str = "work";

/// A task the user plans to do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 date or date-time
    pub due_date: String,
    /// Expected 0-10
    pub complexity: i32,
    /// Expected 0-10
    pub priority: i32,
    /// Minutes
    pub expected_duration: i64,
    pub category: String,
}

impl Task {
    /// Whether the task is labeled as work.
    pub fn is_work(&self) -> bool {
        self.category == WORK_CATEGORY
    }
}

/// A free-text journal entry with self-reported mood and energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub content: String,
    /// Expected 1-10
    pub mood: i32,
    /// Expected 1-10
    pub energy_level: i32,
    pub date: String,
}

/// Observed behavior around one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorRecord {
    pub task_id: String,
    pub postpone_count: u32,
    /// Minutes
    pub time_spent: i64,
    #[serde(default)]
    pub distractions: Vec<String>,
    #[serde(default)]
    pub completion_time: Option<String>,
}

/// Everything the full analysis looks at for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub user_id: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub journals: Vec<JournalEntry>,
    #[serde(default)]
    pub behaviors: Vec<BehaviorRecord>,
}
