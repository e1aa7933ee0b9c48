//! Validation engine for analysis specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against an
//! [`AnalysisSpec`](super::spec::AnalysisSpec) and collects every diagnostic
//! into a [`ValidationReport`]. It never stops at the first error, so users
//! see all problems at once.
//!
//! ```rust,ignore
//! use article_xref::pipeline::validation::ValidationEngine;
//!
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! for err in report.errors() {
//!     eprintln!("{err}");
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::errors::{ErrorCode, SpecError};
use super::spec::{AnalysisSpec, SPEC_VERSION};
use crate::nlp::stopwords::{StopwordFilter, SUPPORTED_LANGUAGES};

// ─── Severity ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &SpecError> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &SpecError> {
        self.with_severity(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No errors (warnings are acceptable)
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Errors rendered one per line
    pub fn error_summary(&self) -> String {
        self.errors()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &SpecError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A stateless check over an [`AnalysisSpec`]
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier (e.g. `"keyword_limits"`)
    fn name(&self) -> &str;

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// An engine pre-loaded with the default rule set
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(KeywordLimitsRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn validate(&self, spec: &AnalysisSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. spec version ────────────────────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == SPEC_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("spec version {} is not supported", spec.v),
            )
            .with_hint(format!("Set \"v\": {SPEC_VERSION}")),
        )]
    }
}

// ─── 2. stopword language must be known ─────────────────────────────────────

struct StopwordLanguageRule;

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopword_language"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let language = &spec.stopwords.language;
        if StopwordFilter::is_supported(language) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::InvalidValue,
                "/stopwords/language",
                format!("unsupported stopword language \"{language}\""),
            )
            .with_hint(format!("Use one of: {}", SUPPORTED_LANGUAGES.join(", "))),
        )]
    }
}

// ─── 3. keyword length floor ────────────────────────────────────────────────

struct KeywordLimitsRule;

impl ValidationRule for KeywordLimitsRule {
    fn name(&self) -> &str {
        "keyword_limits"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.keywords.min_length > 0 {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::InvalidValue,
                "/keywords/min_length",
                "min_length must be at least 1",
            )
            .with_hint("Use 4 to drop tokens of three characters or fewer"),
        )]
    }
}

// ─── 4. runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        if spec.runtime.max_text_chars != Some(0) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecError::new(
                ErrorCode::LimitExceeded,
                "/runtime/max_text_chars",
                "max_text_chars must be greater than 0",
            )
            .with_hint("Remove max_text_chars to disable the limit, or set it to a positive value"),
        )]
    }
}

// ─── 5. unknown fields (strict → error, non-strict → warning) ───────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<&String> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &AnalysisSpec) -> Vec<ValidationDiagnostic> {
        let sections = [
            ("", &spec.unknown_fields),
            ("/stopwords", &spec.stopwords.unknown_fields),
            ("/keywords", &spec.keywords.unknown_fields),
            ("/runtime", &spec.runtime.unknown_fields),
        ];
        sections
            .into_iter()
            .flat_map(|(path, unknowns)| Self::check_unknowns(path, unknowns, spec.strict))
            .collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
