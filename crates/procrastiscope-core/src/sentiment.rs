//! Journal sentiment scoring.
//!
//! Polarity comes from a lexicon behind [`PolarityLexicon`]. The default is
//! VADER; its lexicon is loaded once when the scorer is built and shared by
//! every call afterwards.

use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Raw polarity sub-scores, named as the lexicon reports them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Normalized overall polarity in -1..=1
    pub compound: f64,
}

/// Source of polarity scores for a block of text.
pub trait PolarityLexicon: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    fn name(&self) -> &str {
        "custom"
    }
}

/// VADER lexicon from the `vader_sentiment` crate.
pub struct VaderLexicon {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderLexicon {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityLexicon for VaderLexicon {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScores {
            neg: get("neg"),
            neu: get("neu"),
            pos: get("pos"),
            compound: get("compound"),
        }
    }

    fn name(&self) -> &str {
        "vader"
    }
}

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment: SentimentLabel,
    pub scores: PolarityScores,
    pub explanation: String,
}

/// Labels text using a polarity lexicon.
pub struct SentimentScorer {
    lexicon: Box<dyn PolarityLexicon>,
}

impl SentimentScorer {
    /// Scorer backed by the VADER lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(VaderLexicon::new())
    }

    pub fn with_lexicon(lexicon: impl PolarityLexicon + 'static) -> Self {
        Self {
            lexicon: Box::new(lexicon),
        }
    }

    pub fn lexicon_name(&self) -> &str {
        self.lexicon.name()
    }

    pub fn analyze_sentiment(&self, text: &str) -> SentimentAnalysis {
        let scores = self.lexicon.polarity_scores(text);
        let sentiment = SentimentLabel::from_compound(scores.compound);
        tracing::debug!(chars = text.len(), compound = scores.compound, %sentiment, "sentiment");

        SentimentAnalysis {
            sentiment,
            scores,
            explanation: format!("Your journal entry has a {sentiment} tone overall."),
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer")
            .field("lexicon", &self.lexicon.name())
            .finish()
    }
}
