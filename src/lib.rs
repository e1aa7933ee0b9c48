//! # article-xref
//!
//! Cross-referenced analysis of news article text: sentence segmentation
//! with per-sentence sentiment, quote extraction, capitalization-based
//! keyword extraction, and linking of every quote and keyword to the
//! sentences that mention it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use article_xref::{ArticleAnalysisPipeline, ArticleInput};
//!
//! let pipeline = ArticleAnalysisPipeline::new();
//! let input = ArticleInput::new("https://news.example/a", "\"We will win,\" said Ana Lopez.")
//!     .with_headline("Lopez Confident");
//! let result = pipeline.run(&input)?;
//!
//! for quote in &result.quotes {
//!     println!("{} ({} sentences)", quote.text, quote.occurrence_count);
//! }
//! ```

pub mod content;
pub mod errors;
pub mod extract;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod types;
pub mod xref;

pub use content::{ArticleMetadata, ExtractedContent, HtmlContentExtractor};
pub use errors::{AnalysisError, Result};
pub use extract::keywords::{KeywordConfig, KeywordExtractor};
pub use extract::quotes::QuoteExtractor;
pub use nlp::sentences::{SentenceSegmenter, UnicodeSentenceTokenizer};
pub use nlp::stopwords::StopwordFilter;
pub use pipeline::runner::{ArticleAnalysisPipeline, PipelineBuilder};
pub use pipeline::spec::AnalysisSpec;
pub use pipeline::traits::{ContentExtractor, NeutralScorer, SentenceTokenizer, SentimentScorer};
pub use sentiment::VaderScorer;
pub use types::{
    AnalysisResult, ArticleInput, DocumentSentiment, EntityRecord, Keyword, Quote, Sentence,
    SentimentBucket, SentimentScores, SentimentTally,
};
pub use xref::CrossReferenceAggregator;
