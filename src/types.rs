//! Core data types
//!
//! Records produced by one analysis pass: sentences with their polarity
//! scores, quote and keyword records with cross-reference tallies, and the
//! assembled [`AnalysisResult`].

use serde::{Deserialize, Serialize};

use crate::content::ArticleMetadata;

// ============================================================================
// Sentiment
// ============================================================================

/// Polarity magnitudes for a span of text.
///
/// `positive`, `negative` and `neutral` lie in `[0, 1]` and usually sum to
/// roughly one. `compound` is the normalized overall valence in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    #[serde(rename = "pos")]
    pub positive: f64,
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(default)]
    pub compound: f64,
}

impl SentimentScores {
    /// Create scores without a compound value
    pub fn new(positive: f64, negative: f64, neutral: f64) -> Self {
        Self {
            positive,
            negative,
            neutral,
            compound: 0.0,
        }
    }

    /// Set the compound valence
    pub fn with_compound(mut self, compound: f64) -> Self {
        self.compound = compound;
        self
    }

    /// Classify these scores into exactly one bucket.
    ///
    /// Positive wins whenever `positive > negative`. Negative requires
    /// `negative` to beat both `positive` and `neutral`. Everything else,
    /// including `negative > positive` with `negative <= neutral`, is neutral.
    pub fn bucket(&self) -> SentimentBucket {
        if self.positive > self.negative {
            SentimentBucket::Positive
        } else if self.negative > self.positive && self.negative > self.neutral {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }
}

/// One of the three polarity classes a sentence is counted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBucket {
    Positive,
    Negative,
    Neutral,
}

/// Running per-entity count of sentence buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentTally {
    pub pos_count: u32,
    pub neg_count: u32,
    pub neu_count: u32,
}

impl SentimentTally {
    /// Increment the counter for `bucket`
    pub fn record(&mut self, bucket: SentimentBucket) {
        match bucket {
            SentimentBucket::Positive => self.pos_count += 1,
            SentimentBucket::Negative => self.neg_count += 1,
            SentimentBucket::Neutral => self.neu_count += 1,
        }
    }

    /// Total number of recorded sentences
    pub fn total(&self) -> u32 {
        self.pos_count + self.neg_count + self.neu_count
    }
}

/// Whole-document sentiment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentSentiment {
    /// Headline alone
    pub headline: SentimentScores,
    /// Body text alone
    pub text: SentimentScores,
    /// Title, description and body together
    pub overall: SentimentScores,
}

// ============================================================================
// Sentences and entities
// ============================================================================

/// A sentence span in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text as produced by the tokenizer
    pub text: String,
    /// Character count with newlines collapsed to spaces
    #[serde(rename = "length")]
    pub display_length: usize,
    /// Scores for the newline-collapsed text
    pub sentiment: SentimentScores,
}

/// A quote or keyword together with every sentence that mentions it.
///
/// `text` keeps the casing fixed when the record was created; matching
/// against sentences is case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub text: String,
    /// Number of sentences whose text contains `text`
    #[serde(rename = "count")]
    pub occurrence_count: u32,
    /// Distinct matching sentences, first match first
    #[serde(rename = "sentences")]
    pub sentence_texts: Vec<String>,
    pub sentiment: SentimentTally,
}

impl EntityRecord {
    /// Create a record with zeroed counters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            occurrence_count: 0,
            sentence_texts: Vec::new(),
            sentiment: SentimentTally::default(),
        }
    }

    /// Register a matching sentence.
    ///
    /// The count and the tally move on every call; the sentence text is
    /// stored at most once.
    pub fn record_sentence(&mut self, sentence: &Sentence) {
        self.occurrence_count += 1;
        if !self.sentence_texts.iter().any(|s| s == &sentence.text) {
            self.sentence_texts.push(sentence.text.clone());
        }
        self.sentiment.record(sentence.sentiment.bucket());
    }
}

/// A verbatim quoted span
pub type Quote = EntityRecord;

/// A capitalization-derived topic or entity phrase
pub type Keyword = EntityRecord;

// ============================================================================
// Input and output
// ============================================================================

/// Already-extracted article text and the structured fields the analysis reads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    pub url: String,
    pub text: String,
    #[serde(default)]
    pub headline_text: String,
    #[serde(default)]
    pub description_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ArticleInput {
    /// Create an input with body text only
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the headline
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline_text = headline.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_text = description.into();
        self
    }

    /// Set the structured tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Full analysis of one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub url: String,
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
    /// Quotes in extraction order
    pub quotes: Vec<Quote>,
    /// Keywords, most frequently matched first
    pub keywords: Vec<Keyword>,
    pub sentiment: DocumentSentiment,
    pub word_count: usize,
    /// Body text the analysis ran on
    pub text: String,
    /// Raw HTML passthrough, present when the pipeline ran extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Extraction metadata passthrough, present when the pipeline ran extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ArticleMetadata>,
}

impl AnalysisResult {
    /// Look up a quote by case-insensitive text
    pub fn quote(&self, text: &str) -> Option<&Quote> {
        let needle = text.to_lowercase();
        self.quotes.iter().find(|q| q.text.to_lowercase() == needle)
    }

    /// Look up a keyword by exact text
    pub fn keyword(&self, text: &str) -> Option<&Keyword> {
        self.keywords.iter().find(|k| k.text == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(text: &str, scores: SentimentScores) -> Sentence {
        Sentence {
            text: text.to_string(),
            display_length: text.chars().count(),
            sentiment: scores,
        }
    }

    #[test]
    fn test_bucket_positive_beats_negative() {
        assert_eq!(
            SentimentScores::new(0.4, 0.3, 0.3).bucket(),
            SentimentBucket::Positive
        );
    }

    #[test]
    fn test_bucket_negative_needs_to_beat_neutral() {
        assert_eq!(
            SentimentScores::new(0.1, 0.5, 0.4).bucket(),
            SentimentBucket::Negative
        );
        // negative > positive but negative <= neutral
        assert_eq!(
            SentimentScores::new(0.1, 0.5, 0.6).bucket(),
            SentimentBucket::Neutral
        );
        assert_eq!(
            SentimentScores::new(0.0, 0.5, 0.5).bucket(),
            SentimentBucket::Neutral
        );
    }

    #[test]
    fn test_bucket_ties_are_neutral() {
        assert_eq!(
            SentimentScores::new(0.2, 0.2, 0.6).bucket(),
            SentimentBucket::Neutral
        );
        assert_eq!(SentimentScores::default().bucket(), SentimentBucket::Neutral);
    }

    #[test]
    fn test_record_sentence_stores_text_once() {
        let mut quote = EntityRecord::new("hello");
        let s = sentence("hello hello", SentimentScores::new(0.6, 0.0, 0.4));

        quote.record_sentence(&s);
        quote.record_sentence(&s);

        assert_eq!(quote.occurrence_count, 2);
        assert_eq!(quote.sentence_texts, vec!["hello hello".to_string()]);
        assert_eq!(quote.sentiment.pos_count, 2);
        assert_eq!(quote.sentiment.total(), 2);
    }

    #[test]
    fn test_entity_serializes_with_short_names() {
        let mut keyword = EntityRecord::new("Berlin");
        keyword.record_sentence(&sentence("Berlin is calm.", SentimentScores::new(0.0, 0.0, 1.0)));

        let value = serde_json::to_value(&keyword).unwrap();
        assert_eq!(value["text"], "Berlin");
        assert_eq!(value["count"], 1);
        assert_eq!(value["sentences"][0], "Berlin is calm.");
        assert_eq!(value["sentiment"]["neuCount"], 1);
    }

    #[test]
    fn test_article_input_builder() {
        let input = ArticleInput::new("https://example.com/a", "Body.")
            .with_headline("Head")
            .with_description("Desc")
            .with_tags(["Politics", "Europe"]);

        assert_eq!(input.headline_text, "Head");
        assert_eq!(input.description_text, "Desc");
        assert_eq!(input.tags, vec!["Politics", "Europe"]);
    }
}
