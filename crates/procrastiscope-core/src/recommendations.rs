//! Rule-based recommendations.
//!
//! Pattern recommendations come from a static playbook keyed by pattern
//! kind. Task recommendations are picked by risk tier, with two extra rules
//! for long complex tasks and urgent high-priority ones.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patterns::{Pattern, PatternKind};
use crate::records::Task;
use crate::risk::{days_until_due_at, RiskTier};

/// Category of a pattern-driven recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    General,
    Technique,
    Schedule,
    Motivation,
    Wellbeing,
}

/// A suggestion for the user as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
}

/// A suggestion for one task, tagged by urgency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecommendation {
    pub priority: RiskTier,
    pub title: String,
    pub description: String,
}

struct Template {
    kind: RecommendationType,
    title: &'static str,
    description: &'static str,
}

impl Template {
    fn build(&self) -> Recommendation {
        Recommendation {
            kind: self.kind,
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}

const GENERAL: Template = Template {
    kind: RecommendationType::General,
    title: "Break tasks into smaller steps",
    description: "Divide complex tasks into smaller, manageable pieces to reduce overwhelm",
};

static PLAYBOOK: [(PatternKind, Template); 4] = [
    (
        PatternKind::HighPostponement,
        Template {
            kind: RecommendationType::Technique,
            title: "Use the 2-minute rule",
            description: "If a task takes less than 2 minutes, do it immediately instead of postponing",
        },
    ),
    (
        PatternKind::TimeSensitivity,
        Template {
            kind: RecommendationType::Schedule,
            title: "Schedule important tasks during your peak hours",
            description: "Plan your most important work during your most productive time of day",
        },
    ),
    (
        PatternKind::CategorySensitivity,
        Template {
            kind: RecommendationType::Motivation,
            title: "Find your 'why' for difficult categories",
            description: "Connect work tasks to your larger goals and values to increase motivation",
        },
    ),
    (
        PatternKind::MoodCorrelation,
        Template {
            kind: RecommendationType::Wellbeing,
            title: "Practice quick mood boosters",
            description: "Try a 5-minute walk, brief meditation, or favorite music before starting tasks",
        },
    ),
];

/// Complexity above which a long task gets a progress tracker.
const TRACKER_COMPLEXITY: i32 = 7;
/// Minutes above which a complex task gets a progress tracker.
const TRACKER_DURATION: i64 = 120;
/// Tasks due in fewer days than this count as urgent.
const URGENT_DAYS: i64 = 2;
/// Priority above which an urgent task needs a distraction-free slot.
const URGENT_PRIORITY: i32 = 7;

/// Stateless recommendation generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// One general recommendation, then one per recognized pattern in
    /// pattern order. Unknown kinds are skipped.
    pub fn generate_recommendations(&self, patterns: &[Pattern]) -> Vec<Recommendation> {
        let mut recommendations = vec![GENERAL.build()];

        for pattern in patterns {
            match PLAYBOOK.iter().find(|(kind, _)| *kind == pattern.kind) {
                Some((_, template)) => recommendations.push(template.build()),
                None => tracing::debug!(kind = %pattern.kind, "no recommendation for pattern"),
            }
        }

        recommendations
    }

    pub fn generate_task_recommendations(
        &self,
        task: &Task,
        risk_score: f64,
    ) -> Vec<TaskRecommendation> {
        self.generate_task_recommendations_at(task, risk_score, Utc::now())
    }

    /// [`Self::generate_task_recommendations`] with an explicit reference time.
    pub fn generate_task_recommendations_at(
        &self,
        task: &Task,
        risk_score: f64,
        now: DateTime<Utc>,
    ) -> Vec<TaskRecommendation> {
        let mut recommendations = Vec::new();

        let base = match RiskTier::from_task_risk(risk_score) {
            RiskTier::High => task_rec(
                RiskTier::High,
                "Break this down immediately",
                "This task has high procrastination risk. Break it into 3-5 smaller subtasks.",
            ),
            RiskTier::Medium => task_rec(
                RiskTier::Medium,
                "Schedule a specific start time",
                "Set a specific time to begin this task and create calendar reminders.",
            ),
            RiskTier::Low => task_rec(
                RiskTier::Low,
                "Pair with another task",
                "This task has low procrastination risk. Consider pairing it with a higher-risk task.",
            ),
        };
        recommendations.push(base);

        if task.complexity > TRACKER_COMPLEXITY && task.expected_duration > TRACKER_DURATION {
            recommendations.push(task_rec(
                RiskTier::High,
                "Create a progress tracker",
                "This is a complex, long task. Create checkpoints to track progress.",
            ));
        }

        let days_until_due = days_until_due_at(&task.due_date, now);
        if days_until_due < URGENT_DAYS && task.priority > URGENT_PRIORITY {
            recommendations.push(task_rec(
                RiskTier::High,
                "Eliminate distractions",
                "This high-priority task is due soon. Work in a distraction-free environment.",
            ));
        }

        recommendations
    }
}

fn task_rec(priority: RiskTier, title: &str, description: &str) -> TaskRecommendation {
    TaskRecommendation {
        priority,
        title: title.to_string(),
        description: description.to_string(),
    }
}
