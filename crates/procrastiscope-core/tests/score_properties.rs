//! Property tests for score bounds and pattern thresholds.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use procrastiscope_core::{
    BehaviorRecord, JournalEntry, PatternDetector, PatternKind, RecommendationEngine,
    RiskCalculator, RiskTier, Task,
};

fn task_strategy() -> impl Strategy<Value = Task> {
    (
        -20i32..40,
        -20i32..40,
        0i64..1_000,
        prop_oneof![Just("work".to_string()), Just("home".to_string())],
        prop_oneof![
            Just("2024-05-02T12:00:00Z".to_string()),
            Just("2024-06-30".to_string()),
            Just("garbage".to_string()),
        ],
    )
        .prop_map(|(complexity, priority, expected_duration, category, due_date)| Task {
            title: "generated".into(),
            description: None,
            due_date,
            complexity,
            priority,
            expected_duration,
            category,
        })
}

fn journal_strategy() -> impl Strategy<Value = JournalEntry> {
    (-10i32..20, -10i32..20).prop_map(|(mood, energy_level)| JournalEntry {
        content: String::new(),
        mood,
        energy_level,
        date: "2024-05-01".into(),
    })
}

fn behavior_strategy(max_postpone: u32) -> impl Strategy<Value = BehaviorRecord> {
    (0..=max_postpone).prop_map(|postpone_count| BehaviorRecord {
        task_id: "t".into(),
        postpone_count,
        time_spent: 0,
        distractions: vec![],
        completion_time: None,
    })
}

fn is_one_decimal(value: f64) -> bool {
    ((value * 10.0).round() - value * 10.0).abs() < 1e-9
}

proptest! {
    #[test]
    fn procrastination_score_stays_in_range(
        tasks in prop::collection::vec(task_strategy(), 0..8),
        journals in prop::collection::vec(journal_strategy(), 0..8),
        behaviors in prop::collection::vec(behavior_strategy(50), 0..8),
    ) {
        let score = RiskCalculator::new().predict_procrastination_score(&tasks, &journals, &behaviors);
        prop_assert!((0.0..=100.0).contains(&score));
        prop_assert!(is_one_decimal(score));
    }

    #[test]
    fn task_risk_stays_in_range(task in task_strategy()) {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let risk = RiskCalculator::new().predict_task_risk_at(&task, now);
        prop_assert!((0.0..=10.0).contains(&risk));
        prop_assert!(is_one_decimal(risk));
    }

    #[test]
    fn low_postpone_counts_never_flag(behaviors in prop::collection::vec(behavior_strategy(3), 0..10)) {
        let patterns = PatternDetector::new().identify_patterns(&[], &[], &behaviors);
        prop_assert!(patterns.iter().all(|p| p.kind != PatternKind::HighPostponement));
    }

    #[test]
    fn one_base_recommendation_per_task(task in task_strategy(), risk in 0.0f64..=10.0) {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let recs = RecommendationEngine::new().generate_task_recommendations_at(&task, risk, now);
        prop_assert!((1..=3).contains(&recs.len()));
        prop_assert_eq!(recs[0].priority, RiskTier::from_task_risk(risk));
        prop_assert!(recs[1..].iter().all(|r| r.priority == RiskTier::High));
    }

    #[test]
    fn mood_impact_in_range_for_nominal_inputs(mood in 1i32..=10, energy in 1i32..=10) {
        let impact = RiskCalculator::new().analyze_mood_impact(mood, energy);
        prop_assert!((0.0..=9.0).contains(&impact.impact_score));
    }
}

#[test]
fn single_postpone_of_four_always_flags() {
    let behavior = BehaviorRecord {
        task_id: "t".into(),
        postpone_count: 4,
        time_spent: 0,
        distractions: vec![],
        completion_time: None,
    };
    let patterns = PatternDetector::new().identify_patterns(&[], &[], &[behavior]);
    assert_eq!(patterns[0].kind, PatternKind::HighPostponement);
}
