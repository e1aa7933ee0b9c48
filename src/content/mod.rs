//! Article content and metadata
//!
//! The analysis only reads four structured fields (title, description, tags
//! and body text). Everything else an extractor produces travels through
//! untouched in named namespaces of [`ArticleMetadata`].
//!
//! [`HtmlContentExtractor`] is a small meta-tag and paragraph extractor so
//! that `analyze(url, html)` works out of the box. It is not a readability
//! implementation; plug a better [`ContentExtractor`] in for production.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{AnalysisError, Result};
use crate::pipeline::traits::ContentExtractor;
use crate::types::ArticleInput;

/// Namespace holding every `og:*`, `article:*` and `twitter:*` meta pair
pub const OPEN_GRAPH_NAMESPACE: &str = "openGraph";

// ============================================================================
// Metadata shape
// ============================================================================

/// Structured fields read by the analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Extractor's own body text; dropped before output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Extractor-specific fields, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata bundle produced by a [`ContentExtractor`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    #[serde(default)]
    pub structured: StructuredMetadata,
    /// Opaque namespaces from any other extraction collaborator
    #[serde(flatten)]
    pub namespaces: Map<String, Value>,
}

impl ArticleMetadata {
    /// Drop the redundant structured body text
    pub fn without_text(mut self) -> Self {
        self.structured.text = None;
        self
    }

    pub fn namespace(&self, name: &str) -> Option<&Value> {
        self.namespaces.get(name)
    }
}

/// Body text plus metadata for one page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub metadata: ArticleMetadata,
    pub text: String,
}

impl ExtractedContent {
    /// Analysis input for this content
    pub fn to_input(&self, url: &str) -> ArticleInput {
        let structured = &self.metadata.structured;
        ArticleInput::new(url, self.text.as_str())
            .with_headline(structured.title.as_str())
            .with_description(structured.description.as_str())
            .with_tags(structured.tags.iter().map(String::as_str))
    }
}

// ============================================================================
// HtmlContentExtractor
// ============================================================================

macro_rules! selector {
    ($css:expr) => {
        Lazy::new(|| Selector::parse($css).expect("valid selector"))
    };
}

static TITLE: Lazy<Selector> = selector!("title");
static META: Lazy<Selector> = selector!("meta[content]");
static CANONICAL: Lazy<Selector> = selector!("link[rel='canonical'][href]");
static ARTICLE_PARAGRAPHS: Lazy<Selector> = selector!("article p");
static PARAGRAPHS: Lazy<Selector> = selector!("p");

/// Meta-tag and paragraph based extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlContentExtractor;

impl HtmlContentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContentExtractor for HtmlContentExtractor {
    fn extract(&self, url: &str, html: &str) -> Result<ExtractedContent> {
        let document = Html::parse_document(html);
        let meta = MetaTags::collect(&document);

        let text = body_text(&document);
        if text.is_empty() {
            return Err(AnalysisError::extraction(url, "no paragraph text found"));
        }

        let title = meta
            .get("og:title")
            .map(str::to_string)
            .or_else(|| {
                document
                    .select(&TITLE)
                    .next()
                    .map(|t| collapse_whitespace(&t.text().collect::<String>()))
            })
            .unwrap_or_default();

        let description = meta
            .get("description")
            .or_else(|| meta.get("og:description"))
            .unwrap_or_default()
            .to_string();

        let canonical = document
            .select(&CANONICAL)
            .next()
            .and_then(|l| l.value().attr("href"))
            .map(str::to_string)
            .or_else(|| (!url.is_empty()).then(|| url.to_string()));

        let structured = StructuredMetadata {
            title,
            description,
            tags: meta.tags(),
            text: Some(text.clone()),
            canonical,
            extra: Map::new(),
        };

        let mut namespaces = Map::new();
        namespaces.insert(OPEN_GRAPH_NAMESPACE.to_string(), meta.open_graph());

        Ok(ExtractedContent {
            metadata: ArticleMetadata {
                structured,
                namespaces,
            },
            text,
        })
    }
}

/// `<meta>` pairs in document order, keyed by `name` or `property`
struct MetaTags {
    pairs: Vec<(String, String)>,
}

impl MetaTags {
    fn collect(document: &Html) -> Self {
        let pairs = document
            .select(&META)
            .filter_map(|el| {
                let attrs = el.value();
                let key = attrs.attr("property").or_else(|| attrs.attr("name"))?;
                let content = attrs.attr("content")?.trim();
                Some((key.trim().to_lowercase(), content.to_string()))
            })
            .collect();
        Self { pairs }
    }

    /// First non-empty content for `key`
    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
    }

    /// `keywords` split on commas, then every `article:tag`, deduplicated
    fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        let keywords = self
            .pairs
            .iter()
            .filter(|(k, _)| k == "keywords")
            .flat_map(|(_, v)| v.split(','));
        let article_tags = self
            .pairs
            .iter()
            .filter(|(k, _)| k == "article:tag")
            .map(|(_, v)| v.as_str());

        for tag in keywords.chain(article_tags) {
            let tag = tag.trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }

    /// Social meta pairs; repeated keys become arrays
    fn open_graph(&self) -> Value {
        let mut map = Map::new();
        for (key, value) in &self.pairs {
            if !(key.starts_with("og:") || key.starts_with("article:") || key.starts_with("twitter:")) {
                continue;
            }
            let value = Value::String(value.clone());
            match map.get_mut(key) {
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    map.insert(key.clone(), value);
                }
            }
        }
        Value::Object(map)
    }
}

/// Paragraph text inside `<article>`, else every `<p>`, one paragraph per line
fn body_text(document: &Html) -> String {
    let paragraphs = |selector: &Selector| -> Vec<String> {
        document
            .select(selector)
            .map(|p| collapse_whitespace(&p.text().collect::<String>()))
            .filter(|p| !p.is_empty())
            .collect()
    };

    let mut lines = paragraphs(&ARTICLE_PARAGRAPHS);
    if lines.is_empty() {
        lines = paragraphs(&PARAGRAPHS);
    }
    lines.join("\n")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Fallback   Title</title>
  <meta property="og:title" content="Summit Ends In Deadlock">
  <meta name="description" content="Leaders left Brussels without a deal.">
  <meta name="keywords" content="Europe, Budget ,Europe">
  <meta property="article:tag" content="Brussels">
  <meta property="article:tag" content="Budget">
  <link rel="canonical" href="https://news.example/summit">
</head>
<body>
  <nav><p>Home</p></nav>
  <article>
    <p>The summit in   Brussels ended late.</p>
    <p>"We tried," said one diplomat.</p>
  </article>
</body>
</html>"#;

    #[test]
    fn test_extracts_structured_fields() {
        let content = HtmlContentExtractor::new()
            .extract("https://news.example/summit?ref=x", PAGE)
            .unwrap();
        let s = &content.metadata.structured;

        assert_eq!(s.title, "Summit Ends In Deadlock");
        assert_eq!(s.description, "Leaders left Brussels without a deal.");
        assert_eq!(s.tags, vec!["Europe", "Budget", "Brussels"]);
        assert_eq!(s.canonical.as_deref(), Some("https://news.example/summit"));
        assert_eq!(
            content.text,
            "The summit in Brussels ended late.\n\"We tried,\" said one diplomat."
        );
        assert_eq!(s.text.as_deref(), Some(content.text.as_str()));
    }

    #[test]
    fn test_open_graph_namespace() {
        let content = HtmlContentExtractor::new().extract("", PAGE).unwrap();
        let og = content.metadata.namespace(OPEN_GRAPH_NAMESPACE).unwrap();

        assert_eq!(og["og:title"], "Summit Ends In Deadlock");
        assert_eq!(og["article:tag"][0], "Brussels");
        assert_eq!(og["article:tag"][1], "Budget");
        assert!(og.get("description").is_none());
    }

    #[test]
    fn test_falls_back_to_title_and_paragraphs() {
        let html = "<html><head><title> Plain  Page </title></head>\
                    <body><p>First.</p><div><p>Second.</p></div></body></html>";
        let content = HtmlContentExtractor::new().extract("https://x.test/a", html).unwrap();

        assert_eq!(content.metadata.structured.title, "Plain Page");
        assert_eq!(content.text, "First.\nSecond.");
        assert_eq!(
            content.metadata.structured.canonical.as_deref(),
            Some("https://x.test/a")
        );
    }

    #[test]
    fn test_no_text_is_an_extraction_error() {
        let err = HtmlContentExtractor::new()
            .extract("https://x.test/empty", "<html><body><div>menu</div></body></html>")
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Extraction { .. }));
    }

    #[test]
    fn test_without_text_drops_body_copy() {
        let content = HtmlContentExtractor::new().extract("", PAGE).unwrap();
        let metadata = content.metadata.without_text();

        assert!(metadata.structured.text.is_none());
        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json["structured"].get("text").is_none());
        assert!(json.get(OPEN_GRAPH_NAMESPACE).is_some());
    }

    #[test]
    fn test_to_input_reads_structured_fields() {
        let content = HtmlContentExtractor::new().extract("", PAGE).unwrap();
        let input = content.to_input("https://news.example/summit");

        assert_eq!(input.url, "https://news.example/summit");
        assert_eq!(input.headline_text, "Summit Ends In Deadlock");
        assert_eq!(input.tags.len(), 3);
        assert_eq!(input.text, content.text);
    }

    #[test]
    fn test_metadata_roundtrips_unknown_namespaces() {
        let json = r#"{
            "structured": { "title": "T", "tags": ["a"], "lang": "de" },
            "readability": { "byline": "someone" }
        }"#;
        let metadata: ArticleMetadata = serde_json::from_str(json).unwrap();

        assert_eq!(metadata.structured.title, "T");
        assert_eq!(metadata.structured.extra["lang"], "de");
        assert_eq!(metadata.namespace("readability").unwrap()["byline"], "someone");
    }
}
