//! # Procrastiscope Core Library
//!
//! This library turns a user's tasks, journal entries and behavior logs into
//! a procrastination risk assessment with readable recommendations. The
//! `procrastiscope` CLI is a thin shell over it: it decodes JSON payloads,
//! calls [`AnalysisService`] and prints the result.
//!
//! ## Architecture
//!
//! - **Risk**: deterministic formulas for the 0-100 procrastination score,
//!   the 0-10 task risk score and the mood/energy impact
//! - **Patterns**: additive detection of named behavioral tendencies
//! - **Recommendations**: static playbook keyed by pattern kind and risk tier
//! - **Sentiment**: lexicon-based polarity (VADER) for journal entries
//! - **Storage**: TOML configuration and placeholder model artifacts
//!
//! ## Key Components
//!
//! - [`AnalysisService`]: full, task and journal analysis
//! - [`EngineContext`]: resources loaded once at start-up
//! - [`RiskCalculator`]: numeric scores
//! - [`Config`]: application configuration management

pub mod error;
pub mod insights;
pub mod patterns;
pub mod recommendations;
pub mod records;
pub mod risk;
pub mod sentiment;
pub mod service;
pub mod storage;

pub use error::{ConfigError, CoreError, ModelError, Result, ValidationError};
pub use insights::{Insight, InsightType};
pub use patterns::{Pattern, PatternDetector, PatternKind};
pub use recommendations::{
    Recommendation, RecommendationEngine, RecommendationType, TaskRecommendation,
};
pub use records::{AnalysisRequest, BehaviorRecord, JournalEntry, Task};
pub use risk::{MoodImpact, RiskCalculator, RiskTier, ScoreBreakdown, ScoreTerm};
pub use sentiment::{
    PolarityLexicon, PolarityScores, SentimentAnalysis, SentimentLabel, SentimentScorer,
    VaderLexicon,
};
pub use service::{
    decode_payload, AnalysisService, EngineContext, EngineStatus, FullAnalysis, JournalAnalysis,
    TaskAnalysis,
};
pub use storage::{ArtifactSource, Config, ModelArtifacts, RegressorSpec};
