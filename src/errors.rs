//! Error types for article analysis
//!
//! Every failure aborts the whole `analyze` call; no partial
//! [`AnalysisResult`](crate::types::AnalysisResult) is ever returned.

use thiserror::Error;

/// Failure of one analysis invocation
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The extraction collaborator produced no usable body text
    #[error("content extraction failed for \"{url}\": {reason}")]
    Extraction { url: String, reason: String },

    /// The sentiment scorer failed or returned malformed output for a span
    #[error("sentiment scoring failed for \"{text}\": {reason}")]
    Scoring { text: String, reason: String },

    /// The sentence tokenizer failed
    #[error("sentence segmentation failed: {0}")]
    Segmentation(String),

    /// Input exceeded a configured runtime limit
    #[error("{field} limit exceeded: {actual} > {limit}")]
    LimitExceeded {
        field: &'static str,
        limit: usize,
        actual: usize,
    },

    /// The analysis spec failed validation
    #[error("invalid analysis spec: {0}")]
    InvalidSpec(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Build a scoring error, keeping only a short prefix of the span
    pub fn scoring(text: &str, reason: impl Into<String>) -> Self {
        AnalysisError::Scoring {
            text: text.chars().take(40).collect(),
            reason: reason.into(),
        }
    }

    /// Build an extraction error
    pub fn extraction(url: &str, reason: impl Into<String>) -> Self {
        AnalysisError::Extraction {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_error_truncates_span() {
        let long = "a".repeat(100);
        match AnalysisError::scoring(&long, "nan") {
            AnalysisError::Scoring { text, reason } => {
                assert_eq!(text.len(), 40);
                assert_eq!(reason, "nan");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_limit_message() {
        let err = AnalysisError::LimitExceeded {
            field: "max_text_chars",
            limit: 10,
            actual: 12,
        };
        assert_eq!(err.to_string(), "max_text_chars limit exceeded: 12 > 10");
    }
}
