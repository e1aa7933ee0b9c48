//! Stage trait definitions for the pipeline.
//!
//! Each trait marks a boundary where the analysis hands work to an external
//! capability: content extraction from HTML, sentence-boundary detection and
//! polarity scoring. Implementations are statically dispatched through the
//! generics on [`ArticleAnalysisPipeline`](super::runner::ArticleAnalysisPipeline);
//! trait objects work as well.
//!
//! All stages are `Send + Sync` so per-sentence scoring and the three
//! whole-document scores can run on the rayon pool.

use crate::content::ExtractedContent;
use crate::errors::Result;
use crate::types::SentimentScores;

// ============================================================================
// ContentExtractor — raw HTML to body text + metadata (stage 0)
// ============================================================================

/// Turns a fetched page into body text and a metadata bundle.
///
/// # Contract
///
/// - **Input**: the article URL (may be empty, which only degrades quality)
///   and the raw HTML.
/// - **Output**: [`ExtractedContent`] whose `text` is non-empty, or an
///   [`AnalysisError::Extraction`](crate::errors::AnalysisError::Extraction).
pub trait ContentExtractor: Send + Sync {
    fn extract(&self, url: &str, html: &str) -> Result<ExtractedContent>;
}

// ============================================================================
// SentenceTokenizer — sentence-boundary detection
// ============================================================================

/// Splits normalized text into sentence candidates.
///
/// # Contract
///
/// - Output order is document order.
/// - Implementations honor newline boundaries and markup boundaries.
/// - Candidates may be returned untrimmed; empty candidates are dropped by
///   the segmenter.
pub trait SentenceTokenizer: Send + Sync {
    fn sentences(&self, text: &str) -> Result<Vec<String>>;
}

// ============================================================================
// SentimentScorer — polarity magnitudes for a span
// ============================================================================

/// Scores a span of text.
///
/// The analysis only reads `positive`, `negative` and `neutral` (plus the
/// passthrough `compound`). Malformed output must be reported as an
/// [`AnalysisError::Scoring`](crate::errors::AnalysisError::Scoring).
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentScores>;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        (**self).score(text)
    }
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for Box<T> {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        (**self).score(text)
    }
}

impl<T: SentenceTokenizer + ?Sized> SentenceTokenizer for Box<T> {
    fn sentences(&self, text: &str) -> Result<Vec<String>> {
        (**self).sentences(text)
    }
}

impl<T: ContentExtractor + ?Sized> ContentExtractor for Box<T> {
    fn extract(&self, url: &str, html: &str) -> Result<ExtractedContent> {
        (**self).extract(url, html)
    }
}

/// Scorer that reports every span as fully neutral.
///
/// Useful when only quotes and keywords are of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralScorer;

impl SentimentScorer for NeutralScorer {
    #[inline]
    fn score(&self, _text: &str) -> Result<SentimentScores> {
        Ok(SentimentScores::new(0.0, 0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalysisError;
    use crate::types::SentimentBucket;

    struct LengthScorer;

    impl SentimentScorer for LengthScorer {
        fn score(&self, text: &str) -> Result<SentimentScores> {
            if text.is_empty() {
                return Err(AnalysisError::scoring(text, "empty span"));
            }
            Ok(SentimentScores::new(text.len() as f64, 0.0, 0.0))
        }
    }

    #[test]
    fn test_neutral_scorer_is_neutral() {
        let scores = NeutralScorer.score("Markets crashed horribly.").unwrap();
        assert_eq!(scores.bucket(), SentimentBucket::Neutral);
        assert_eq!(scores.neutral, 1.0);
    }

    #[test]
    fn test_scorer_as_trait_object() {
        let scorer: Box<dyn SentimentScorer> = Box::new(LengthScorer);
        assert_eq!(scorer.score("abc").unwrap().positive, 3.0);
        assert!(scorer.score("").is_err());
    }

    #[test]
    fn test_scorer_by_reference() {
        fn run<S: SentimentScorer>(scorer: S) -> f64 {
            scorer.score("ab").unwrap().positive
        }
        let scorer = LengthScorer;
        assert_eq!(run(&scorer), 2.0);
    }

    #[test]
    fn test_custom_tokenizer_splits_on_pipes() {
        struct PipeTokenizer;

        impl SentenceTokenizer for PipeTokenizer {
            fn sentences(&self, text: &str) -> Result<Vec<String>> {
                Ok(text.split('|').map(str::to_string).collect())
            }
        }

        let tokenizer: Box<dyn SentenceTokenizer> = Box::new(PipeTokenizer);
        assert_eq!(tokenizer.sentences("a|b").unwrap(), vec!["a", "b"]);
    }
}
