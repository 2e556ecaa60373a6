//! Analysis service: the boundary-facing composition of the engine.
//!
//! [`EngineContext`] is built once at start-up (lexicon, model artifacts)
//! and never mutated afterwards. [`AnalysisService`] borrows it for every
//! call, so one service can serve concurrent requests without locking.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::insights::{journal_insights, Insight};
use crate::patterns::{Pattern, PatternDetector};
use crate::recommendations::{Recommendation, RecommendationEngine, TaskRecommendation};
use crate::records::{AnalysisRequest, JournalEntry, Task};
use crate::risk::{MoodImpact, RiskCalculator, ScoreBreakdown};
use crate::sentiment::{SentimentAnalysis, SentimentScorer};
use crate::storage::{ArtifactSource, Config, ModelArtifacts};

/// Shown by [`AnalysisService::status`].
pub const STATUS_MESSAGE: &str = "Procrastination analysis engine is running";

/// Process-wide resources, loaded once.
#[derive(Debug)]
pub struct EngineContext {
    pub sentiment: SentimentScorer,
    /// Not consulted by any score yet.
    pub models: ModelArtifacts,
}

impl EngineContext {
    pub fn new(sentiment: SentimentScorer, models: ModelArtifacts) -> Self {
        Self { sentiment, models }
    }

    /// VADER plus the model artifacts from the configured directory.
    ///
    /// Missing artifacts are recreated. An unusable artifact directory
    /// falls back to untrained in-memory artifacts.
    pub fn initialize(config: &Config) -> Self {
        let models = match config.models_dir() {
            Ok(models_dir) => {
                let models =
                    ModelArtifacts::load_or_create(&models_dir, config.models.persist_defaults);
                tracing::info!(
                    models_dir = %models_dir.display(),
                    source = ?models.source,
                    "engine context initialized"
                );
                models
            }
            Err(e) => {
                tracing::warn!(error = %e, "model directory unavailable, using untrained artifacts");
                ModelArtifacts::untrained()
            }
        };
        Self::new(SentimentScorer::new(), models)
    }

    /// VADER with untrained in-memory artifacts; touches no files.
    pub fn ephemeral() -> Self {
        Self::new(SentimentScorer::new(), ModelArtifacts::untrained())
    }
}

/// Result of the full analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub procrastination_score: f64,
    pub patterns: Vec<Pattern>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    /// Name of the term raising the score the most, with the breakdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_driver: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalysis {
    pub risk_score: f64,
    pub recommendations: Vec<TaskRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalAnalysis {
    pub sentiment: SentimentAnalysis,
    pub mood_impact: MoodImpact,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub message: String,
    pub lexicon: String,
    pub models: ArtifactSource,
    pub models_fitted: bool,
}

pub struct AnalysisService {
    context: EngineContext,
    risk: RiskCalculator,
    patterns: PatternDetector,
    recommendations: RecommendationEngine,
}

impl AnalysisService {
    pub fn new(context: EngineContext) -> Self {
        Self {
            context,
            risk: RiskCalculator::new(),
            patterns: PatternDetector::new(),
            recommendations: RecommendationEngine::new(),
        }
    }

    /// Score, patterns and recommendations for everything in the request.
    pub fn analyze(&self, request: &AnalysisRequest) -> FullAnalysis {
        self.full_analysis(request, false)
    }

    /// [`Self::analyze`] plus the weighted terms behind the score.
    pub fn analyze_with_breakdown(&self, request: &AnalysisRequest) -> FullAnalysis {
        self.full_analysis(request, true)
    }

    fn full_analysis(&self, request: &AnalysisRequest, explain: bool) -> FullAnalysis {
        let _span = tracing::debug_span!("analyze", user_id = %request.user_id).entered();

        let breakdown = self.risk.procrastination_breakdown(
            &request.tasks,
            &request.journals,
            &request.behaviors,
        );
        let patterns =
            self.patterns
                .identify_patterns(&request.tasks, &request.journals, &request.behaviors);
        let recommendations = self.recommendations.generate_recommendations(&patterns);

        let top_driver = if explain {
            breakdown.top_driver().map(|term| term.name.clone())
        } else {
            None
        };

        FullAnalysis {
            procrastination_score: breakdown.score,
            patterns,
            recommendations,
            breakdown: explain.then_some(breakdown),
            top_driver,
        }
    }

    pub fn analyze_task(&self, task: &Task) -> TaskAnalysis {
        self.analyze_task_at(task, Utc::now())
    }

    /// [`Self::analyze_task`] with an explicit reference time.
    pub fn analyze_task_at(&self, task: &Task, now: DateTime<Utc>) -> TaskAnalysis {
        let risk_score = self.risk.predict_task_risk_at(task, now);
        let recommendations = self
            .recommendations
            .generate_task_recommendations_at(task, risk_score, now);
        TaskAnalysis {
            risk_score,
            recommendations,
        }
    }

    pub fn analyze_journal(&self, entry: &JournalEntry) -> JournalAnalysis {
        let sentiment = self.context.sentiment.analyze_sentiment(&entry.content);
        let mood_impact = self.risk.analyze_mood_impact(entry.mood, entry.energy_level);
        let insights = journal_insights(&sentiment, &mood_impact);
        JournalAnalysis {
            sentiment,
            mood_impact,
            insights,
        }
    }

    /// Recommendations for caller-supplied patterns.
    pub fn recommend(&self, patterns: &[Pattern]) -> Vec<Recommendation> {
        self.recommendations.generate_recommendations(patterns)
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            message: STATUS_MESSAGE.to_string(),
            lexicon: self.context.sentiment.lexicon_name().to_string(),
            models: self.context.models.source,
            models_fitted: self.context.models.any_fitted(),
        }
    }
}

/// Decode a JSON payload, rejecting blank input with a readable error.
pub fn decode_payload<T: DeserializeOwned>(raw: &str, what: &str) -> Result<T> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyInput(format!("expected {what} as a JSON document")).into());
    }
    Ok(serde_json::from_str(raw)?)
}
