//! Heuristic risk scoring.
//!
//! Three independent calculations share this module:
//!
//! | Calculation | Range | Inputs |
//! |-------------|-------|--------|
//! | Procrastination score | 0-100 | tasks, journals, behaviors |
//! | Task risk | 0-10 | one task and the clock |
//! | Mood impact | low / medium / high | mood and energy |
//!
//! All of them are pure and never fail. Empty collections fall back to
//! fixed averages instead of erroring.

mod breakdown;
pub mod due;

pub use breakdown::{ScoreBreakdown, ScoreTerm, MAX_PROCRASTINATION_SCORE};
pub use due::{days_until_due_at, parse_due_date, DEFAULT_DAYS_UNTIL_DUE};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{BehaviorRecord, JournalEntry, Task};

/// Upper bound of the per-task risk score.
pub const MAX_TASK_RISK: f64 = 10.0;

const POSTPONE_WEIGHT: f64 = 10.0;
const COMPLEXITY_WEIGHT: f64 = 5.0;
const PRIORITY_WEIGHT: f64 = -3.0;
const MOOD_WEIGHT: f64 = -2.0;
/// Mood assumed when no journal entries exist (midpoint of 1-10).
const DEFAULT_MOOD: f64 = 5.0;

/// Due dates closer than this many days add urgency risk.
const URGENCY_WINDOW_DAYS: i64 = 7;

/// Coarse risk classification shared by task risk and mood impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Tier of a 0-10 task risk score: `> 7` high, `> 4` medium.
    pub fn from_task_risk(risk_score: f64) -> Self {
        if risk_score > 7.0 {
            RiskTier::High
        } else if risk_score > 4.0 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    /// Tier of a 0-1 mood impact total: `> 0.7` high, `> 0.4` medium.
    pub fn from_mood_total(total: f64) -> Self {
        if total > 0.7 {
            RiskTier::High
        } else if total > 0.4 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How current mood and energy bear on procrastination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodImpact {
    pub risk_level: RiskTier,
    /// 0-10, one decimal
    pub impact_score: f64,
    pub description: String,
}

/// Stateless calculator for the numeric scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskCalculator;

impl RiskCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate procrastination tendency, 0-100.
    pub fn predict_procrastination_score(
        &self,
        tasks: &[Task],
        journals: &[JournalEntry],
        behaviors: &[BehaviorRecord],
    ) -> f64 {
        self.procrastination_breakdown(tasks, journals, behaviors).score
    }

    /// The aggregate score with each weighted term spelled out.
    pub fn procrastination_breakdown(
        &self,
        tasks: &[Task],
        journals: &[JournalEntry],
        behaviors: &[BehaviorRecord],
    ) -> ScoreBreakdown {
        let avg_postpone = mean(behaviors.iter().map(|b| f64::from(b.postpone_count))).unwrap_or(0.0);
        let avg_complexity = mean(tasks.iter().map(|t| f64::from(t.complexity))).unwrap_or(0.0);
        let avg_priority = mean(tasks.iter().map(|t| f64::from(t.priority))).unwrap_or(0.0);
        let avg_mood = mean(journals.iter().map(|j| f64::from(j.mood))).unwrap_or(DEFAULT_MOOD);

        let mut breakdown = ScoreBreakdown::new();
        breakdown.add_term(ScoreTerm::new("postponement", avg_postpone, POSTPONE_WEIGHT));
        breakdown.add_term(ScoreTerm::new("complexity", avg_complexity, COMPLEXITY_WEIGHT));
        breakdown.add_term(ScoreTerm::new("priority", avg_priority, PRIORITY_WEIGHT));
        breakdown.add_term(ScoreTerm::new("mood", avg_mood, MOOD_WEIGHT));

        tracing::debug!(
            tasks = tasks.len(),
            journals = journals.len(),
            behaviors = behaviors.len(),
            raw = breakdown.raw,
            score = breakdown.score,
            "procrastination score"
        );
        breakdown
    }

    /// Risk that a single task gets postponed, 0-10.
    pub fn predict_task_risk(&self, task: &Task) -> f64 {
        self.predict_task_risk_at(task, Utc::now())
    }

    /// [`Self::predict_task_risk`] with an explicit reference time.
    pub fn predict_task_risk_at(&self, task: &Task, now: DateTime<Utc>) -> f64 {
        let days_until_due = days_until_due_at(&task.due_date, now);
        let urgency = (URGENCY_WINDOW_DAYS - days_until_due).max(0) as f64;

        let raw = f64::from(task.complexity) * 1.5 + task.expected_duration as f64 * 0.5
            - f64::from(task.priority) * 0.8
            + urgency * 0.3;

        let risk = round_one_decimal(raw.clamp(0.0, MAX_TASK_RISK));
        tracing::debug!(title = %task.title, days_until_due, raw, risk, "task risk");
        risk
    }

    /// Impact of mood and energy (both nominally 1-10).
    ///
    /// Values outside 1-10 are not rejected; the same linear formula is
    /// applied, so the impact score can leave 0-10.
    pub fn analyze_mood_impact(&self, mood: i32, energy_level: i32) -> MoodImpact {
        let mood_impact = (10.0 - f64::from(mood)) * 0.7;
        let energy_impact = (10.0 - f64::from(energy_level)) * 0.3;
        let total = (mood_impact + energy_impact) / 10.0;

        let risk_level = RiskTier::from_mood_total(total);
        let description = match risk_level {
            RiskTier::High => {
                "Your current mood and energy levels suggest a high risk of procrastination."
            }
            RiskTier::Medium => {
                "Your current mood and energy suggest a moderate risk of procrastination."
            }
            RiskTier::Low => "Your current mood and energy levels are conducive to productivity.",
        };

        MoodImpact {
            risk_level,
            impact_score: round_one_decimal(total * 10.0),
            description: description.to_string(),
        }
    }
}

/// Round half away from zero to one decimal place.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn task(complexity: i32, priority: i32, expected_duration: i64, due_date: &str) -> Task {
        Task {
            title: "Write report".into(),
            description: None,
            due_date: due_date.into(),
            complexity,
            priority,
            expected_duration,
            category: "work".into(),
        }
    }

    fn behavior(postpone_count: u32) -> BehaviorRecord {
        BehaviorRecord {
            task_id: "t1".into(),
            postpone_count,
            time_spent: 0,
            distractions: vec![],
            completion_time: None,
        }
    }

    fn journal(mood: i32) -> JournalEntry {
        JournalEntry {
            content: String::new(),
            mood,
            energy_level: 5,
            date: "2024-05-01".into(),
        }
    }

    #[test]
    fn empty_inputs_score_zero() {
        let calc = RiskCalculator::new();
        let breakdown = calc.procrastination_breakdown(&[], &[], &[]);
        assert_eq!(breakdown.raw, -10.0);
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(calc.predict_procrastination_score(&[], &[], &[]), 0.0);
    }

    #[test]
    fn procrastination_score_formula() {
        let calc = RiskCalculator::new();
        let tasks = vec![task(6, 2, 30, ""), task(8, 4, 30, "")];
        let journals = vec![journal(4), journal(6)];
        let behaviors = vec![behavior(2), behavior(3)];
        // 2.5*10 + 7*5 - 3*3 - 5*2 = 41
        assert_eq!(calc.predict_procrastination_score(&tasks, &journals, &behaviors), 41.0);
    }

    #[test]
    fn procrastination_score_rounds_to_one_decimal() {
        let calc = RiskCalculator::new();
        let behaviors = vec![behavior(1), behavior(1), behavior(2)];
        let journals = vec![journal(1)];
        // 13.333.. - 2 = 11.333..
        assert_eq!(calc.predict_procrastination_score(&[], &journals, &behaviors), 11.3);
    }

    #[test]
    fn procrastination_score_saturates() {
        let calc = RiskCalculator::new();
        let behaviors = vec![behavior(100)];
        let tasks = vec![task(100, 0, 0, "")];
        let journals = vec![journal(0)];
        assert_eq!(calc.predict_procrastination_score(&tasks, &journals, &behaviors), 100.0);
    }

    #[test]
    fn breakdown_names_terms_in_order() {
        let calc = RiskCalculator::new();
        let b = calc.procrastination_breakdown(&[], &[], &[]);
        let names: Vec<_> = b.terms.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["postponement", "complexity", "priority", "mood"]);
        assert_eq!(b.term("mood").unwrap().average, 5.0);
    }

    #[test]
    fn task_risk_far_due_date() {
        let calc = RiskCalculator::new();
        let due = (now() + Duration::days(30)).to_rfc3339();
        // 4*1.5 + 2*0.5 - 5*0.8 = 3.0
        assert_eq!(calc.predict_task_risk_at(&task(4, 5, 2, &due), now()), 3.0);
    }

    #[test]
    fn task_risk_counts_urgency() {
        let calc = RiskCalculator::new();
        let due = (now() + Duration::hours(36)).to_rfc3339();
        // 1 day left: 2*1.5 + 0 - 5*0.8 + 6*0.3 = 0.8
        assert_eq!(calc.predict_task_risk_at(&task(2, 5, 0, &due), now()), 0.8);
    }

    #[test]
    fn task_risk_unparseable_date_uses_default() {
        let calc = RiskCalculator::new();
        // default 7 days -> no urgency: 2*1.5 + 2*0.5 = 4.0
        assert_eq!(calc.predict_task_risk_at(&task(2, 0, 2, "soon"), now()), 4.0);
    }

    #[test]
    fn task_risk_is_clamped() {
        let calc = RiskCalculator::new();
        assert_eq!(calc.predict_task_risk_at(&task(10, 0, 600, "x"), now()), 10.0);
        assert_eq!(calc.predict_task_risk_at(&task(0, 10, 0, "x"), now()), 0.0);
    }

    #[test]
    fn mood_impact_extremes() {
        let calc = RiskCalculator::new();

        let best = calc.analyze_mood_impact(10, 10);
        assert_eq!(best.risk_level, RiskTier::Low);
        assert_eq!(best.impact_score, 0.0);

        let worst = calc.analyze_mood_impact(1, 1);
        assert_eq!(worst.risk_level, RiskTier::High);
        assert_eq!(worst.impact_score, 9.0);
        assert!(worst.description.contains("high risk"));
    }

    #[test]
    fn mood_impact_medium_band() {
        let calc = RiskCalculator::new();
        // (5*0.7 + 5*0.3) / 10 = 0.5
        let impact = calc.analyze_mood_impact(5, 5);
        assert_eq!(impact.risk_level, RiskTier::Medium);
        assert_eq!(impact.impact_score, 5.0);
    }

    #[test]
    fn mood_impact_extrapolates_out_of_range() {
        let calc = RiskCalculator::new();
        let impact = calc.analyze_mood_impact(-10, -10);
        assert_eq!(impact.risk_level, RiskTier::High);
        assert_eq!(impact.impact_score, 20.0);
    }

    #[test]
    fn mood_impact_survives_integer_extremes() {
        let calc = RiskCalculator::new();

        let lowest = calc.analyze_mood_impact(i32::MIN, 5);
        assert_eq!(lowest.risk_level, RiskTier::High);
        assert!(lowest.impact_score > 1.0e8);

        let highest = calc.analyze_mood_impact(i32::MAX, i32::MAX);
        assert_eq!(highest.risk_level, RiskTier::Low);
        assert!(highest.impact_score < -1.0e8);
    }

    #[test]
    fn tier_boundaries_are_strict() {
        assert_eq!(RiskTier::from_task_risk(7.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_task_risk(7.1), RiskTier::High);
        assert_eq!(RiskTier::from_task_risk(4.0), RiskTier::Low);
        assert_eq!(RiskTier::from_task_risk(4.1), RiskTier::Medium);
        assert_eq!(RiskTier::from_mood_total(0.7), RiskTier::Medium);
        assert_eq!(RiskTier::from_mood_total(0.4), RiskTier::Low);
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskTier::Medium).unwrap(), "\"medium\"");
        assert_eq!(RiskTier::High.to_string(), "high");
    }
}
