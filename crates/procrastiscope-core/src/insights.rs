//! Journal insights derived from sentiment and mood impact.

use serde::{Deserialize, Serialize};

use crate::risk::{MoodImpact, RiskTier};
use crate::sentiment::{SentimentAnalysis, SentimentLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Warning,
    Strength,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(kind: InsightType, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// At most one sentiment insight, then a mood insight when mood risk is high.
pub fn journal_insights(sentiment: &SentimentAnalysis, mood: &MoodImpact) -> Vec<Insight> {
    let mut insights = Vec::new();

    match sentiment.sentiment {
        SentimentLabel::Negative => insights.push(Insight::new(
            InsightType::Warning,
            "Negative outlook detected",
            "Your journal shows signs of negative thinking, which can increase procrastination.",
        )),
        SentimentLabel::Positive => insights.push(Insight::new(
            InsightType::Strength,
            "Positive mindset",
            "Your positive outlook is a great foundation for tackling challenging tasks.",
        )),
        SentimentLabel::Neutral => {}
    }

    if mood.risk_level == RiskTier::High {
        insights.push(Insight::new(
            InsightType::Suggestion,
            "Mood intervention needed",
            "Consider a brief mood-boosting activity before tackling important tasks today.",
        ));
    }

    insights
}
