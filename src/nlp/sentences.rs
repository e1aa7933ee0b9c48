//! Sentence segmentation
//!
//! Line breaks are treated as soft sentence boundaries: every newline that is
//! not preceded by a full stop gets one inserted before boundary detection
//! runs. Each resulting sentence is scored for sentiment with newlines
//! collapsed to spaces.

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::Result;
use crate::pipeline::traits::{SentenceTokenizer, SentimentScorer};
use crate::types::Sentence;

static LINE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"([^.])\n").expect("valid regex"));

static MARKUP_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*br\s*/?\s*>|<\s*/?\s*(?:p|div)(?:\s[^>]*)?>").expect("valid regex")
});

/// Abbreviations that end in a full stop without ending a sentence.
///
/// Lower-cased, trailing stop removed. Single letters (initials) are handled
/// separately.
static ABBREVIATIONS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "rev", "gen", "sen", "rep", "gov",
        "pres", "lt", "col", "sgt", "capt", "cmdr", "adm", "maj", "mt", "ft", "ave", "blvd",
        "inc", "corp", "ltd", "co", "bros", "vs", "approx", "dept", "est", "fig", "jan", "feb",
        "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k",
        "u.n", "e.u", "e.g", "i.e", "a.m", "p.m", "d.c",
    ]
    .into_iter()
    .collect()
});

/// Insert a full stop before every newline whose preceding character is not
/// already one.
///
/// Only `.` counts as already terminated, so `"Really?\nYes"` becomes
/// `"Really?.\nYes"`. This is intended.
///
/// Matches are non-overlapping, so in a run of blank lines only every other
/// newline gets a stop.
pub fn normalize_line_breaks(text: &str) -> String {
    LINE_END.replace_all(text, "$1.\n").into_owned()
}

// ============================================================================
// UnicodeSentenceTokenizer
// ============================================================================

/// Default sentence-boundary detector.
///
/// Boundaries, in order of precedence: `<br>`, `<p>` and `<div>` markup,
/// newlines, then UAX#29 sentence boundaries within each line. A UAX#29
/// break right after a known abbreviation or an initial (`Mr.`, `U.S.`,
/// `J.`) is not a boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceTokenizer;

impl SentenceTokenizer for UnicodeSentenceTokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>> {
        let text = MARKUP_BOUNDARY.replace_all(text, "\n");
        let mut sentences = Vec::new();

        for line in text.lines() {
            let mut pending = String::new();
            for piece in line.unicode_sentences() {
                pending.push_str(piece);
                if !ends_with_abbreviation(pending.trim_end()) {
                    push_trimmed(&mut sentences, &pending);
                    pending.clear();
                }
            }
            push_trimmed(&mut sentences, &pending);
        }

        Ok(sentences)
    }
}

fn push_trimmed(sentences: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if !candidate.is_empty() {
        sentences.push(candidate.to_string());
    }
}

/// Whether the last word of `candidate` is an abbreviation or initial
fn ends_with_abbreviation(candidate: &str) -> bool {
    let Some(word) = candidate.strip_suffix('.') else {
        return false;
    };
    let last = word
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(word)
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = last.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_alphabetic(),
        (Some(_), Some(_)) => ABBREVIATIONS.contains(last.to_lowercase().as_str()),
        _ => false,
    }
}

// ============================================================================
// SentenceSegmenter
// ============================================================================

/// Produces scored [`Sentence`] records in document order
#[derive(Debug, Clone)]
pub struct SentenceSegmenter<T = UnicodeSentenceTokenizer> {
    tokenizer: T,
    parallel: bool,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self::with_tokenizer(UnicodeSentenceTokenizer)
    }
}

impl<T: SentenceTokenizer> SentenceSegmenter<T> {
    /// Use a custom boundary detector
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            tokenizer,
            parallel: true,
        }
    }

    /// Toggle rayon-parallel scoring
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Split `text` into sentences and score each one.
    ///
    /// The first scoring failure aborts the whole segmentation. Output order
    /// is document order whether or not scoring ran in parallel.
    pub fn segment<S: SentimentScorer>(&self, text: &str, scorer: &S) -> Result<Vec<Sentence>> {
        let normalized = normalize_line_breaks(text);
        let candidates: Vec<String> = self
            .tokenizer
            .sentences(&normalized)?
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .collect();

        if self.parallel {
            candidates
                .into_par_iter()
                .map(|s| score_sentence(s, scorer))
                .collect()
        } else {
            candidates
                .into_iter()
                .map(|s| score_sentence(s, scorer))
                .collect()
        }
    }
}

fn score_sentence<S: SentimentScorer>(text: String, scorer: &S) -> Result<Sentence> {
    let collapsed = text.replace('\n', " ");
    let sentiment = scorer.score(&collapsed)?;
    Ok(Sentence {
        display_length: collapsed.chars().count(),
        sentiment,
        text,
    })
}
