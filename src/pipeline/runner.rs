//! Pipeline runner — orchestrates stage execution and record flow.
//!
//! The [`ArticleAnalysisPipeline`] struct holds a statically-composed set of
//! collaborators. Calling [`ArticleAnalysisPipeline::analyze`] extracts the
//! page and then runs the analysis stages in order, notifying an optional
//! [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! The pipeline is generic over the three external capabilities (content
//! extraction, sentence boundaries, polarity scoring), so each combination is
//! monomorphized into its own concrete type. The in-crate stages (quotes,
//! keywords, cross-referencing) are plain fields.
//!
//! # Concurrency
//!
//! One pipeline value can serve any number of concurrent documents: `run`
//! takes `&self` and every invocation owns its own records. Inside one
//! document, sentence scoring and the three whole-document scores run on the
//! rayon pool unless `parallel` is off.

use crate::content::{ExtractedContent, HtmlContentExtractor};
use crate::errors::{AnalysisError, Result};
use crate::extract::keywords::KeywordExtractor;
use crate::extract::quotes::QuoteExtractor;
use crate::nlp::sentences::{SentenceSegmenter, UnicodeSentenceTokenizer};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_ASSEMBLE,
    STAGE_CROSS_REFERENCE, STAGE_DOCUMENT_SENTIMENT, STAGE_EXTRACT, STAGE_KEYWORDS, STAGE_QUOTES,
    STAGE_SENTENCES,
};
use crate::pipeline::spec::AnalysisSpec;
use crate::pipeline::traits::{ContentExtractor, SentenceTokenizer, SentimentScorer};
use crate::pipeline::validation::ValidationEngine;
use crate::sentiment::VaderScorer;
use crate::types::{AnalysisResult, ArticleInput, DocumentSentiment};
use crate::xref::CrossReferenceAggregator;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Run one stage inside its span, reporting timing and item count.
fn run_stage<O, R>(
    observer: &mut O,
    stage: &'static str,
    count: impl FnOnce(&R) -> Option<usize>,
    work: impl FnOnce() -> Result<R>,
) -> Result<R>
where
    O: PipelineObserver + ?Sized,
{
    trace_stage!(stage);
    observer.on_stage_start(stage);
    let clock = StageClock::start();
    let output = work()?;
    let mut report = StageReportBuilder::new(clock.elapsed());
    if let Some(items) = count(&output) {
        report = report.items(items);
    }
    observer.on_stage_end(stage, &report.build());
    Ok(output)
}

// ============================================================================
// ArticleAnalysisPipeline — statically-composed stage container
// ============================================================================

/// Quote, keyword and sentiment analysis for one article at a time.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `E` | [`ContentExtractor`] | [`HtmlContentExtractor`] |
/// | `T` | [`SentenceTokenizer`] | [`UnicodeSentenceTokenizer`] |
/// | `S` | [`SentimentScorer`] | [`VaderScorer`] |
#[derive(Debug)]
pub struct ArticleAnalysisPipeline<
    E = HtmlContentExtractor,
    T = UnicodeSentenceTokenizer,
    S = VaderScorer,
> {
    pub extractor: E,
    pub segmenter: SentenceSegmenter<T>,
    pub scorer: S,
    pub quotes: QuoteExtractor,
    pub keywords: KeywordExtractor,
    pub aggregator: CrossReferenceAggregator,
    parallel: bool,
    max_text_chars: Option<usize>,
}

impl ArticleAnalysisPipeline {
    /// Pipeline with every default collaborator
    pub fn new() -> Self {
        PipelineBuilder::new().build()
    }
}

impl Default for ArticleAnalysisPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T, S> ArticleAnalysisPipeline<E, T, S>
where
    E: ContentExtractor,
    T: SentenceTokenizer,
    S: SentimentScorer,
{
    /// Extract `html` and analyze the result.
    ///
    /// The result carries the raw `html` and the extractor's metadata
    /// (without its redundant body text) as passthrough fields.
    pub fn analyze(&self, url: &str, html: &str) -> Result<AnalysisResult> {
        self.analyze_with_observer(url, html, &mut NoopObserver)
    }

    pub fn analyze_with_observer(
        &self,
        url: &str,
        html: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<AnalysisResult> {
        let content: ExtractedContent =
            run_stage(observer, STAGE_EXTRACT, |_| None, || self.extractor.extract(url, html))?;
        observer.on_content(&content);
        if content.text.trim().is_empty() {
            return Err(AnalysisError::extraction(url, "no usable body text"));
        }

        let input = content.to_input(url);
        let mut result = self.run_with_observer(&input, observer)?;
        result.html = Some(html.to_string());
        result.metadata = Some(content.metadata.without_text());
        Ok(result)
    }

    /// Analyze already-extracted text
    pub fn run(&self, input: &ArticleInput) -> Result<AnalysisResult> {
        self.run_with_observer(input, &mut NoopObserver)
    }

    /// Analyze already-extracted text.
    ///
    /// Stages run in order:
    /// 1. Quotes (seeded from the body text)
    /// 2. Sentences (normalized, segmented, scored)
    /// 3. Keywords (from the word pool, tags appended)
    /// 4. Cross-reference sentences against quotes and keywords
    /// 5. Whole-document sentiment (headline, body, overall)
    /// 6. Assemble
    ///
    /// The first failure in any stage aborts the call.
    pub fn run_with_observer(
        &self,
        input: &ArticleInput,
        observer: &mut impl PipelineObserver,
    ) -> Result<AnalysisResult> {
        self.check_limits(input)?;

        #[cfg(feature = "tracing")]
        {
            if input.url.is_empty() {
                tracing::warn!("analyzing article without a url");
            }
        }

        let mut quotes = run_stage(
            observer,
            STAGE_QUOTES,
            |q: &Vec<_>| Some(q.len()),
            || Ok(self.quotes.records(&input.text)),
        )?;
        observer.on_quotes(&quotes);

        let sentences = run_stage(
            observer,
            STAGE_SENTENCES,
            |s: &Vec<_>| Some(s.len()),
            || self.segmenter.segment(&input.text, &self.scorer),
        )?;
        observer.on_sentences(&sentences);

        let mut keywords = run_stage(
            observer,
            STAGE_KEYWORDS,
            |k: &Vec<_>| Some(k.len()),
            || {
                let pool = KeywordExtractor::word_pool(
                    &input.headline_text,
                    &input.description_text,
                    &input.tags,
                    &input.text,
                );
                Ok(self.keywords.records(&pool, &input.tags))
            },
        )?;
        observer.on_keywords(&keywords);

        run_stage(
            observer,
            STAGE_CROSS_REFERENCE,
            |_| None,
            || {
                self.aggregator
                    .aggregate(&sentences, &mut quotes, &mut keywords);
                Ok(())
            },
        )?;

        let sentiment = run_stage(observer, STAGE_DOCUMENT_SENTIMENT, |_| None, || {
            self.document_sentiment(input)
        })?;

        let result = run_stage(observer, STAGE_ASSEMBLE, |_| None, || {
            Ok(AnalysisResult {
                url: input.url.clone(),
                sentences,
                quotes,
                keywords,
                sentiment,
                word_count: input.text.split_whitespace().count(),
                text: input.text.clone(),
                html: None,
                metadata: None,
            })
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            url = %result.url,
            sentences = result.sentences.len(),
            quotes = result.quotes.len(),
            keywords = result.keywords.len(),
            word_count = result.word_count,
            "article analyzed"
        );

        Ok(result)
    }

    /// Headline, body and `headline description body` scored independently
    fn document_sentiment(&self, input: &ArticleInput) -> Result<DocumentSentiment> {
        let overall_text = format!(
            "{} {} {}",
            input.headline_text, input.description_text, input.text
        );
        let score = |text: &str| self.scorer.score(text);

        let (headline, (text, overall)) = if self.parallel {
            rayon::join(
                || score(&input.headline_text),
                || rayon::join(|| score(&input.text), || score(&overall_text)),
            )
        } else {
            (
                score(&input.headline_text),
                (score(&input.text), score(&overall_text)),
            )
        };

        Ok(DocumentSentiment {
            headline: headline?,
            text: text?,
            overall: overall?,
        })
    }

    fn check_limits(&self, input: &ArticleInput) -> Result<()> {
        if let Some(limit) = self.max_text_chars {
            let actual = input.text.chars().count();
            if actual > limit {
                return Err(AnalysisError::LimitExceeded {
                    field: "max_text_chars",
                    limit,
                    actual,
                });
            }
        }
        Ok(())
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn max_text_chars(&self) -> Option<usize> {
        self.max_text_chars
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom collaborators
// ============================================================================

/// Fluent builder for an [`ArticleAnalysisPipeline`].
///
/// ```
/// # use article_xref::pipeline::runner::PipelineBuilder;
/// # use article_xref::pipeline::traits::NeutralScorer;
/// let pipeline = PipelineBuilder::new()
///     .scorer(NeutralScorer)
///     .parallel(false)
///     .build();
/// ```
pub struct PipelineBuilder<E = HtmlContentExtractor, T = UnicodeSentenceTokenizer, S = VaderScorer> {
    extractor: E,
    tokenizer: T,
    scorer: S,
    keywords: KeywordExtractor,
    parallel: bool,
    max_text_chars: Option<usize>,
}

impl PipelineBuilder {
    /// Start from the default collaborators
    pub fn new() -> Self {
        PipelineBuilder {
            extractor: HtmlContentExtractor,
            tokenizer: UnicodeSentenceTokenizer,
            scorer: VaderScorer::new(),
            keywords: KeywordExtractor::new(),
            parallel: true,
            max_text_chars: None,
        }
    }

    /// Start from a validated [`AnalysisSpec`].
    ///
    /// Any validation error fails with [`AnalysisError::InvalidSpec`];
    /// warnings are logged and otherwise ignored.
    pub fn from_spec(spec: &AnalysisSpec) -> Result<Self> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(AnalysisError::InvalidSpec(report.error_summary()));
        }

        #[cfg(feature = "tracing")]
        {
            for warning in report.warnings() {
                tracing::warn!(%warning, "analysis spec warning");
            }
        }

        let keywords = KeywordExtractor::with_stopwords(spec.stopwords.build())
            .with_config((&spec.keywords).into());

        Ok(Self::new()
            .keyword_extractor(keywords)
            .parallel(spec.runtime.parallel)
            .max_text_chars(spec.runtime.max_text_chars))
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, T, S> PipelineBuilder<E, T, S> {
    /// Override the content extractor.
    pub fn extractor<X: ContentExtractor>(self, extractor: X) -> PipelineBuilder<X, T, S> {
        PipelineBuilder {
            extractor,
            tokenizer: self.tokenizer,
            scorer: self.scorer,
            keywords: self.keywords,
            parallel: self.parallel,
            max_text_chars: self.max_text_chars,
        }
    }

    /// Override the sentence tokenizer.
    pub fn tokenizer<X: SentenceTokenizer>(self, tokenizer: X) -> PipelineBuilder<E, X, S> {
        PipelineBuilder {
            extractor: self.extractor,
            tokenizer,
            scorer: self.scorer,
            keywords: self.keywords,
            parallel: self.parallel,
            max_text_chars: self.max_text_chars,
        }
    }

    /// Override the sentiment scorer.
    pub fn scorer<X: SentimentScorer>(self, scorer: X) -> PipelineBuilder<E, T, X> {
        PipelineBuilder {
            extractor: self.extractor,
            tokenizer: self.tokenizer,
            scorer,
            keywords: self.keywords,
            parallel: self.parallel,
            max_text_chars: self.max_text_chars,
        }
    }

    pub fn keyword_extractor(mut self, keywords: KeywordExtractor) -> Self {
        self.keywords = keywords;
        self
    }

    /// Swap the keyword stopword list, keeping the keyword config
    pub fn stopwords(mut self, stopwords: StopwordFilter) -> Self {
        let config = self.keywords.config().clone();
        self.keywords = KeywordExtractor::with_stopwords(stopwords).with_config(config);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject texts longer than `limit` characters (`None` disables the check)
    pub fn max_text_chars(mut self, limit: Option<usize>) -> Self {
        self.max_text_chars = limit;
        self
    }
}

impl<E, T: SentenceTokenizer, S> PipelineBuilder<E, T, S> {
    /// Consume the builder and produce an [`ArticleAnalysisPipeline`].
    pub fn build(self) -> ArticleAnalysisPipeline<E, T, S> {
        ArticleAnalysisPipeline {
            extractor: self.extractor,
            segmenter: SentenceSegmenter::with_tokenizer(self.tokenizer)
                .with_parallel(self.parallel),
            scorer: self.scorer,
            quotes: QuoteExtractor::new(),
            keywords: self.keywords,
            aggregator: CrossReferenceAggregator::new(),
            parallel: self.parallel,
            max_text_chars: self.max_text_chars,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ArticleMetadata;
    use crate::pipeline::observer::StageTimingObserver;
    use crate::pipeline::traits::NeutralScorer;
    use crate::types::{Keyword, Quote, Sentence, SentimentScores};

    /// Positive for "good", negative for "bad", neutral otherwise
    struct WordScorer;

    impl SentimentScorer for WordScorer {
        fn score(&self, text: &str) -> Result<SentimentScores> {
            let lower = text.to_lowercase();
            Ok(if lower.contains("good") {
                SentimentScores::new(0.7, 0.0, 0.3)
            } else if lower.contains("bad") {
                SentimentScores::new(0.0, 0.7, 0.3)
            } else {
                SentimentScores::new(0.0, 0.0, 1.0)
            })
        }
    }

    struct FailingScorer;

    impl SentimentScorer for FailingScorer {
        fn score(&self, text: &str) -> Result<SentimentScores> {
            Err(AnalysisError::scoring(text, "scorer offline"))
        }
    }

    struct FixedExtractor;

    impl ContentExtractor for FixedExtractor {
        fn extract(&self, _url: &str, _html: &str) -> Result<ExtractedContent> {
            let mut metadata = ArticleMetadata::default();
            metadata.structured.title = "Good News From Oslo".to_string();
            metadata.structured.tags = vec!["Norway".to_string()];
            metadata.structured.text = Some("Oslo is good.".to_string());
            Ok(ExtractedContent {
                metadata,
                text: "Oslo is good.\nBergen was bad".to_string(),
            })
        }
    }

    fn pipeline() -> ArticleAnalysisPipeline<HtmlContentExtractor, UnicodeSentenceTokenizer, WordScorer> {
        PipelineBuilder::new().scorer(WordScorer).build()
    }

    fn input() -> ArticleInput {
        ArticleInput::new(
            "https://news.example/oslo",
            "Officials in Oslo said \"this is good\" on Monday. Critics in Bergen called it bad.",
        )
        .with_headline("Deal Reached")
        .with_description("Talks ended.")
        .with_tags(["Norway"])
    }

    #[test]
    fn test_pipeline_builder_default() {
        let pipeline = PipelineBuilder::new().scorer(NeutralScorer).build();
        assert!(pipeline.is_parallel());
        assert_eq!(pipeline.max_text_chars(), None);
    }

    #[test]
    fn test_run_links_entities() {
        let result = pipeline().run(&input()).unwrap();

        assert_eq!(result.sentences.len(), 2);
        assert_eq!(result.quotes.len(), 1);
        let quote = result.quote("this is good").unwrap();
        assert_eq!(quote.occurrence_count, 1);
        assert_eq!(quote.sentiment.pos_count, 1);

        let oslo = result.keyword("Oslo").unwrap();
        assert_eq!(oslo.occurrence_count, 1);
        let bergen = result.keyword("Bergen").unwrap();
        assert_eq!(bergen.sentiment.neg_count, 1);

        assert_eq!(result.keywords.last().unwrap().text, "Norway");
        assert!(result.html.is_none());
        assert!(result.metadata.is_none());
    }

    #[test]
    fn test_document_sentiment_spans() {
        let input = ArticleInput::new("u", "Nothing much.")
            .with_headline("A good day")
            .with_description("Calm.");
        let result = pipeline().run(&input).unwrap();

        assert_eq!(result.sentiment.headline.positive, 0.7);
        assert_eq!(result.sentiment.text.neutral, 1.0);
        assert_eq!(result.sentiment.overall.positive, 0.7);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let parallel = pipeline().run(&input()).unwrap();
        let sequential = PipelineBuilder::new()
            .scorer(WordScorer)
            .parallel(false)
            .build()
            .run(&input())
            .unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_word_count() {
        let result = pipeline()
            .run(&ArticleInput::new("u", " one two\nthree  "))
            .unwrap();
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn test_empty_text() {
        let result = pipeline().run(&ArticleInput::new("u", "")).unwrap();
        assert!(result.sentences.is_empty());
        assert!(result.quotes.is_empty());
        assert_eq!(result.word_count, 0);
    }

    #[test]
    fn test_empty_url_is_not_an_error() {
        let result = pipeline().run(&ArticleInput::new("", "Fine text.")).unwrap();
        assert_eq!(result.url, "");
    }

    #[test]
    fn test_scoring_failure_aborts() {
        let pipeline = PipelineBuilder::new().scorer(FailingScorer).build();
        let err = pipeline.run(&input()).unwrap_err();
        assert!(matches!(err, AnalysisError::Scoring { .. }));
    }

    #[test]
    fn test_text_limit() {
        let pipeline = PipelineBuilder::new()
            .scorer(NeutralScorer)
            .max_text_chars(Some(10))
            .build();
        let err = pipeline
            .run(&ArticleInput::new("u", "twelve chars"))
            .unwrap_err();
        assert_eq!(err.to_string(), "max_text_chars limit exceeded: 12 > 10");
        assert!(pipeline.run(&ArticleInput::new("u", "short")).is_ok());
    }

    #[test]
    fn test_timing_observer_sees_every_stage() {
        let mut obs = StageTimingObserver::new();
        pipeline()
            .analyze_with_observer("https://x.test/a", "<p>Good day in Oslo.</p>", &mut obs)
            .unwrap();

        let names: Vec<&str> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                STAGE_EXTRACT,
                STAGE_QUOTES,
                STAGE_SENTENCES,
                STAGE_KEYWORDS,
                STAGE_CROSS_REFERENCE,
                STAGE_DOCUMENT_SENTIMENT,
                STAGE_ASSEMBLE,
            ]
        );
        assert_eq!(obs.report(STAGE_SENTENCES).unwrap().items(), Some(1));
        assert_eq!(obs.report(STAGE_EXTRACT).unwrap().items(), None);
    }

    #[test]
    fn test_run_skips_extract_stage() {
        let mut obs = StageTimingObserver::new();
        pipeline().run_with_observer(&input(), &mut obs).unwrap();
        assert!(obs.report(STAGE_EXTRACT).is_none());
        assert_eq!(obs.reports().len(), 6);
    }

    /// Observer that captures record hooks
    #[derive(Default)]
    struct RecordObserver {
        saw_content: bool,
        quote_counts: Vec<u32>,
        sentences: usize,
        keywords: Vec<String>,
    }

    impl PipelineObserver for RecordObserver {
        fn on_content(&mut self, _content: &ExtractedContent) {
            self.saw_content = true;
        }
        fn on_quotes(&mut self, quotes: &[Quote]) {
            self.quote_counts = quotes.iter().map(|q| q.occurrence_count).collect();
        }
        fn on_sentences(&mut self, sentences: &[Sentence]) {
            self.sentences = sentences.len();
        }
        fn on_keywords(&mut self, keywords: &[Keyword]) {
            self.keywords = keywords.iter().map(|k| k.text.clone()).collect();
        }
    }

    #[test]
    fn test_record_hooks_see_seeds() {
        let mut obs = RecordObserver::default();
        pipeline()
            .analyze_with_observer("https://x.test/a", "", &mut obs)
            .map(|_| ())
            .unwrap_err();
        assert!(!obs.saw_content);

        let pipeline = PipelineBuilder::new()
            .extractor(FixedExtractor)
            .scorer(WordScorer)
            .build();
        pipeline
            .analyze_with_observer("https://x.test/a", "<html></html>", &mut obs)
            .unwrap();

        assert!(obs.saw_content);
        assert!(obs.quote_counts.is_empty());
        assert_eq!(obs.sentences, 2);
        assert!(obs.keywords.contains(&"Norway".to_string()));
    }

    #[test]
    fn test_analyze_passes_html_and_metadata_through() {
        let pipeline = PipelineBuilder::new()
            .extractor(FixedExtractor)
            .scorer(WordScorer)
            .build();
        let html = "<html><body>raw</body></html>";
        let result = pipeline.analyze("https://x.test/oslo", html).unwrap();

        assert_eq!(result.html.as_deref(), Some(html));
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.structured.title, "Good News From Oslo");
        assert!(metadata.structured.text.is_none());
        assert_eq!(result.text, "Oslo is good.\nBergen was bad");
        assert_eq!(result.sentiment.headline.positive, 0.7);
        assert_eq!(result.sentences[1].text, "Bergen was bad");
    }

    /// Extractor that always yields the same body text and no metadata
    struct BodyOnlyExtractor(&'static str);

    impl ContentExtractor for BodyOnlyExtractor {
        fn extract(&self, _url: &str, _html: &str) -> Result<ExtractedContent> {
            Ok(ExtractedContent {
                metadata: ArticleMetadata::default(),
                text: self.0.to_string(),
            })
        }
    }

    #[test]
    fn test_blank_extracted_text_aborts() {
        for body in ["", "  \n "] {
            let pipeline = PipelineBuilder::new()
                .extractor(BodyOnlyExtractor(body))
                .scorer(NeutralScorer)
                .build();
            let err = pipeline
                .analyze("https://x.test/blank", "<html></html>")
                .map(|_| ())
                .unwrap_err();
            assert!(
                matches!(err, AnalysisError::Extraction { ref url, .. } if url == "https://x.test/blank"),
                "unexpected error for {body:?}: {err}"
            );
        }
    }

    #[test]
    fn test_extraction_failure_aborts() {
        let err = pipeline()
            .analyze("https://x.test/empty", "<html><body></body></html>")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Extraction { .. }));
    }

    #[test]
    fn test_from_spec_applies_settings() {
        let spec = AnalysisSpec::from_json(
            r#"{
                "v": 1,
                "stopwords": { "extra": ["Oslo"] },
                "keywords": { "include_tags": false },
                "runtime": { "parallel": false, "max_text_chars": 500 }
            }"#,
        )
        .unwrap();
        let pipeline = PipelineBuilder::from_spec(&spec)
            .unwrap()
            .scorer(WordScorer)
            .build();

        assert!(!pipeline.is_parallel());
        assert_eq!(pipeline.max_text_chars(), Some(500));

        let result = pipeline.run(&input()).unwrap();
        assert!(result.keyword("Oslo").is_none());
        assert!(result.keyword("Norway").is_none());
        assert!(result.keyword("Bergen").is_some());
    }

    #[test]
    fn test_from_spec_rejects_invalid() {
        let spec = AnalysisSpec::from_json(r#"{ "v": 2, "keywords": { "min_length": 0 } }"#).unwrap();
        let err = PipelineBuilder::from_spec(&spec).map(|_| ()).unwrap_err();
        match err {
            AnalysisError::InvalidSpec(msg) => {
                assert!(msg.contains("/v"));
                assert!(msg.contains("/keywords/min_length"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_spec_tolerates_warnings() {
        let spec = AnalysisSpec::from_json(r#"{ "v": 1, "future_option": true }"#).unwrap();
        assert!(PipelineBuilder::from_spec(&spec).is_ok());
    }
}
