//! Analysis specification types.
//!
//! An [`AnalysisSpec`] configures stopwords, keyword extraction and runtime
//! behavior. It is the input to the
//! [`ValidationEngine`](super::validation::ValidationEngine) and to
//! [`PipelineBuilder::from_spec`](super::runner::PipelineBuilder::from_spec).
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "stopwords": { "language": "en", "extra": ["reuters"], "remove": [] },
//!   "keywords": { "min_length": 4, "strip_article": true, "include_tags": true },
//!   "runtime": { "parallel": true, "max_text_chars": 500000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::extract::keywords::KeywordConfig;
use crate::nlp::stopwords::StopwordFilter;

/// Current spec version
pub const SPEC_VERSION: u32 = 1;

/// Top-level analysis specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    #[serde(default)]
    pub keywords: KeywordSpec,

    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for AnalysisSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            stopwords: StopwordSpec::default(),
            keywords: KeywordSpec::default(),
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalysisSpec {
    /// Parse a spec from JSON. Validation is a separate step.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Stopword list selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopwordSpec {
    #[serde(default = "default_language")]
    pub language: String,

    /// Words added on top of the language list
    #[serde(default)]
    pub extra: Vec<String>,

    /// Words removed from the language list
    #[serde(default)]
    pub remove: Vec<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for StopwordSpec {
    fn default() -> Self {
        Self {
            language: default_language(),
            extra: Vec::new(),
            remove: Vec::new(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl StopwordSpec {
    /// Build the filter this section describes
    pub fn build(&self) -> StopwordFilter {
        let mut filter = StopwordFilter::new(&self.language);
        filter.add_stopwords(&self.extra);
        filter.remove_stopwords(&self.remove);
        filter
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Keyword extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSpec {
    /// Minimum kept candidate length in characters
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_true")]
    pub strip_article: bool,

    #[serde(default = "default_true")]
    pub include_tags: bool,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for KeywordSpec {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            strip_article: true,
            include_tags: true,
            unknown_fields: HashMap::new(),
        }
    }
}

impl From<&KeywordSpec> for KeywordConfig {
    fn from(spec: &KeywordSpec) -> Self {
        KeywordConfig {
            min_length: spec.min_length,
            strip_article: spec.strip_article,
            include_tags: spec.include_tags,
        }
    }
}

fn default_min_length() -> usize {
    KeywordConfig::default().min_length
}

fn default_true() -> bool {
    true
}

/// Runtime execution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Score sentences and document spans on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Reject body text longer than this many characters
    #[serde(default)]
    pub max_text_chars: Option<usize>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for RuntimeSpec {
    fn default() -> Self {
        Self {
            parallel: true,
            max_text_chars: None,
            unknown_fields: HashMap::new(),
        }
    }
}
