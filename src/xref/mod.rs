//! Sentence ↔ entity cross-referencing
//!
//! A sentence mentions an entity when the entity text, lower-cased, occurs
//! anywhere in the lower-cased sentence. This is a plain substring test with
//! no word boundaries, so `Iran` matches inside `Iranian`.

use crate::types::{EntityRecord, Keyword, Quote, Sentence};

/// Links quotes and keywords to the sentences that mention them
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossReferenceAggregator;

impl CrossReferenceAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Scan every sentence against both entity sets, then order keywords by
    /// match count (stable, descending). Quotes keep extraction order.
    pub fn aggregate(&self, sentences: &[Sentence], quotes: &mut [Quote], keywords: &mut [Keyword]) {
        let lowered: Vec<String> = sentences.iter().map(|s| s.text.to_lowercase()).collect();

        self.link(sentences, &lowered, quotes);
        self.link(sentences, &lowered, keywords);

        sort_by_count(keywords);
    }

    /// Record every (sentence, entity) containment for one entity set.
    ///
    /// `lowered[i]` must be the lower-cased text of `sentences[i]`.
    pub fn link(&self, sentences: &[Sentence], lowered: &[String], entities: &mut [EntityRecord]) {
        let needles: Vec<String> = entities.iter().map(|e| e.text.to_lowercase()).collect();

        for (sentence, haystack) in sentences.iter().zip(lowered) {
            for (entity, needle) in entities.iter_mut().zip(&needles) {
                if haystack.contains(needle.as_str()) {
                    entity.record_sentence(sentence);
                }
            }
        }
    }
}

/// Stable sort, highest `occurrence_count` first
pub fn sort_by_count(entities: &mut [EntityRecord]) {
    entities.sort_by(|a, b| b.occurrence_count.cmp(&a.occurrence_count));
}
