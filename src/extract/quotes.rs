//! Quotation extraction
//!
//! Curly, German low/high and French guillemet quotation marks are folded to
//! `"` before pairs are matched. A pair may span lines and may contain
//! backslash-escaped characters, including an escaped `"`.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::types::Quote;

static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)"(?:\\?.)*?""#).expect("valid regex"));

/// Opening and closing marks that are folded to an ASCII double quote
const QUOTE_MARKS: &[char] = &['\u{201C}', '\u{201D}', '\u{201E}', '\u{00AB}', '\u{00BB}'];

/// Finds quoted spans and deduplicates them case-insensitively
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteExtractor;

impl QuoteExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Fold every supported quotation mark to `"`
    pub fn normalize(text: &str) -> String {
        text.replace(QUOTE_MARKS, "\"")
    }

    /// Quoted spans in order of first appearance.
    ///
    /// Spans that differ only by case collapse into one entry; the entry keeps
    /// the position of the first occurrence and the casing of the last.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = Self::normalize(text);

        let mut quotes: Vec<String> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for m in QUOTED_SPAN.find_iter(&normalized) {
            let quote = strip_marks(m.as_str()).to_string();
            let key = quote.to_lowercase();
            match index.get(&key) {
                Some(&i) => quotes[i] = quote,
                None => {
                    index.insert(key, quotes.len());
                    quotes.push(quote);
                }
            }
        }

        quotes
    }

    /// Zero-count quote records for every extracted span
    pub fn records(&self, text: &str) -> Vec<Quote> {
        self.extract(text).into_iter().map(Quote::new).collect()
    }
}

fn strip_marks(span: &str) -> &str {
    let span = span.trim();
    let span = span.strip_prefix('"').unwrap_or(span);
    let span = span.strip_suffix('"').unwrap_or(span);
    span.trim()
}
