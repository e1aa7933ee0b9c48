//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! records for debugging, and emitting structured telemetry.
//!
//! All hooks have empty default bodies, so an observer only implements what
//! it cares about. [`NoopObserver`] implements none of them.

use std::time::{Duration, Instant};

use crate::content::ExtractedContent;
use crate::types::{Keyword, Quote, Sentence};

// ============================================================================
// Stage names
// ============================================================================

pub const STAGE_EXTRACT: &str = "extract";
pub const STAGE_QUOTES: &str = "quotes";
pub const STAGE_SENTENCES: &str = "sentences";
pub const STAGE_KEYWORDS: &str = "keywords";
pub const STAGE_CROSS_REFERENCE: &str = "cross_reference";
pub const STAGE_DOCUMENT_SENTIMENT: &str = "document_sentiment";
pub const STAGE_ASSEMBLE: &str = "assemble";

// ============================================================================
// StageClock / StageReport
// ============================================================================

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of records the stage produced, when it produces a collection
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Builder for a [`StageReport`] carrying optional metrics
#[derive(Debug, Clone, Copy)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn items(mut self, items: usize) -> Self {
        self.report.items = Some(items);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// PipelineObserver
// ============================================================================

/// Callbacks fired by [`ArticleAnalysisPipeline`](super::runner::ArticleAnalysisPipeline).
///
/// Stage hooks fire in pipeline order. Record hooks fire right after the
/// stage that produced the records; `on_quotes` and `on_keywords` see the
/// zero-count seeds, before cross-referencing.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Extraction output, only when the pipeline ran from HTML
    fn on_content(&mut self, _content: &ExtractedContent) {}

    fn on_quotes(&mut self, _quotes: &[Quote]) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_keywords(&mut self, _keywords: &[Keyword]) {}
}

impl<O: PipelineObserver + ?Sized> PipelineObserver for &mut O {
    fn on_stage_start(&mut self, stage: &'static str) {
        (**self).on_stage_start(stage)
    }

    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        (**self).on_stage_end(stage, report)
    }

    fn on_content(&mut self, content: &ExtractedContent) {
        (**self).on_content(content)
    }

    fn on_quotes(&mut self, quotes: &[Quote]) {
        (**self).on_quotes(quotes)
    }

    fn on_sentences(&mut self, sentences: &[Sentence]) {
        (**self).on_sentences(sentences)
    }

    fn on_keywords(&mut self, keywords: &[Keyword]) {
        (**self).on_keywords(keywords)
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records a `(stage, report)` pair for every finished stage
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for `stage`, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all recorded stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
