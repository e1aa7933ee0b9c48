//! Lexicon-based sentiment scoring
//!
//! [`VaderScorer`] is the default [`SentimentScorer`]. It wraps the VADER
//! analyzer and validates its output before handing it to the pipeline.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::errors::{AnalysisError, Result};
use crate::pipeline::traits::SentimentScorer;
use crate::types::SentimentScores;

/// VADER-backed polarity scorer.
///
/// Shared read-only across threads; one instance can serve any number of
/// concurrent analyses.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VaderScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderScorer").finish_non_exhaustive()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        let scores = self.analyzer.polarity_scores(text);
        let field = |name: &str| -> Result<f64> {
            match scores.get(name) {
                Some(v) if v.is_finite() => Ok(*v),
                Some(v) => Err(AnalysisError::scoring(text, format!("{name} is {v}"))),
                None => Err(AnalysisError::scoring(text, format!("missing {name}"))),
            }
        };

        Ok(
            SentimentScores::new(field("pos")?, field("neg")?, field("neu")?)
                .with_compound(field("compound")?),
        )
    }
}
