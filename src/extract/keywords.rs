//! Capitalization-pattern keyword extraction
//!
//! Candidates come from two passes over a word pool:
//! 1. maximal runs of two or more capitalized tokens (`Prime Minister Theresa May`)
//! 2. every single capitalized token (`Prime`, `Minister`, ...)
//!
//! The candidates are then normalized, deduplicated, length-filtered, reduced
//! to their most specific form and stopword-filtered. Structured tags are
//! appended afterwards without going through any of those steps.
//!
//! A token is an ASCII uppercase letter followed by ASCII letters, digits or
//! hyphens. Tokens may start in the middle of a word (`iPhone` yields `Phone`).

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Keyword;

static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-zA-Z0-9-]*(?:\s[A-Z][a-zA-Z0-9-]*)+").expect("valid regex"));

static CAPITALIZED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-zA-Z0-9-]*").expect("valid regex"));

const ARTICLE_PREFIX: &str = "The ";
const ARTICLE_SUFFIX: &str = " The";

/// Configuration for keyword extraction
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    /// Candidates shorter than this many characters are dropped
    pub min_length: usize,
    /// Strip a leading `"The "` or trailing `" The"`
    pub strip_article: bool,
    /// Append structured tags as keywords
    pub include_tags: bool,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_length: 4,
            strip_article: true,
            include_tags: true,
        }
    }
}

/// Capitalization-pattern keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    config: KeywordConfig,
    stopwords: StopwordFilter,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with the English stopword list
    pub fn new() -> Self {
        Self::with_stopwords(StopwordFilter::default())
    }

    /// Create an extractor with a custom stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self {
            config: KeywordConfig::default(),
            stopwords,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: KeywordConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the minimum kept candidate length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Build the word pool: headline, description, comma-joined tags and
    /// body, separated by single spaces.
    pub fn word_pool(headline: &str, description: &str, tags: &[String], text: &str) -> String {
        format!("{headline} {description} {} {text}", tags.join(","))
    }

    /// Extract keyword candidates from a word pool
    pub fn extract(&self, pool: &str) -> Vec<String> {
        let mut candidates: Vec<String> = CAPITALIZED_RUN
            .find_iter(pool)
            .chain(CAPITALIZED_TOKEN.find_iter(pool))
            .map(|m| m.as_str().to_string())
            .collect();

        if self.config.strip_article {
            for candidate in candidates.iter_mut() {
                if let Some(stripped) = strip_article(candidate) {
                    *candidate = stripped;
                }
            }
        }

        let unique = self.dedup(candidates);
        most_specific(&unique)
            .into_iter()
            .filter(|c| !self.stopwords.is_stopword(c))
            .map(str::to_string)
            .collect()
    }

    /// Zero-count keyword records for an article, tags appended last
    pub fn records(&self, pool: &str, tags: &[String]) -> Vec<Keyword> {
        let mut keywords: Vec<Keyword> = self.extract(pool).into_iter().map(Keyword::new).collect();
        if self.config.include_tags {
            keywords.extend(tags.iter().map(|t| Keyword::new(t.as_str())));
        }
        keywords
    }

    /// Exact-match dedup in first-seen order, dropping short candidates
    fn dedup(&self, candidates: Vec<String>) -> Vec<String> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut unique = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if candidate.chars().count() < self.config.min_length {
                continue;
            }
            if seen.insert(candidate.clone()) {
                unique.push(candidate);
            }
        }
        unique
    }
}

/// Strip the English article from a candidate.
///
/// The suffix rule wins: a candidate ending in `" The"` loses only the
/// suffix even when it also starts with `"The "`.
fn strip_article(candidate: &str) -> Option<String> {
    if let Some(stripped) = candidate.strip_suffix(ARTICLE_SUFFIX) {
        return Some(stripped.to_string());
    }
    candidate
        .strip_prefix(ARTICLE_PREFIX)
        .map(str::to_string)
}

/// Keep only candidates not contained in any other distinct candidate.
///
/// Quadratic in the number of candidates, which stays in the tens per
/// document.
fn most_specific(candidates: &[String]) -> Vec<&str> {
    candidates
        .iter()
        .filter(|item| {
            !candidates
                .iter()
                .any(|other| other != *item && other.contains(item.as_str()))
        })
        .map(String::as_str)
        .collect()
}
