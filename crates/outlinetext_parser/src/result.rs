//! Parse output types.
//!
//! These types are serialized with camelCase keys since they travel over the
//! request/response protocol unchanged.

use serde::{Deserialize, Serialize};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// An advisory message attached to a parse result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 0-based line number.
    pub line: usize,

    /// 0-based column.
    pub column: usize,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// The diagnostic message.
    pub message: String,

    /// Machine-readable identifier of the check that produced this diagnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            severity: Severity::Error,
            message: message.into(),
            code: None,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the diagnostic code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// A heading extracted from the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingInfo {
    /// Heading level (1-6).
    pub level: u8,
    /// Raw heading text, before inline markup substitution.
    pub text: String,
    /// 0-based line number.
    pub line: usize,
}

/// A reference (citation) entry. The built-in parser never produces any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceInfo {
    pub group: String,
    pub key: String,
    pub content: String,
    pub citations: u32,
}

/// Metadata gathered during one parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseMetadata {
    /// Wall-clock parse duration in milliseconds.
    pub parse_time: f64,

    /// Set by the request layer when the result was served from cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_hit: Option<bool>,

    /// Extracted headings in document order.
    #[serde(default)]
    pub headings: Vec<HeadingInfo>,

    /// Extracted references.
    #[serde(default)]
    pub references: Vec<ReferenceInfo>,
}

/// The complete output of parsing one document.
///
/// Immutable once returned; the cache hands out clones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Rendered HTML wrapped in the output container.
    pub html: String,

    /// Parse metadata.
    #[serde(default)]
    pub metadata: ParseMetadata,

    /// Advisory diagnostics.
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Returns a copy marked as served from cache.
    pub fn as_cache_hit(&self) -> Self {
        let mut result = self.clone();
        result.metadata.cache_hit = Some(true);
        result
    }
}

/// Per-request parse options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// `Some(false)` bypasses the cache lookup for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_cache: Option<bool>,

    /// URI of the document being parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::new(3, 0, "message")
            .with_severity(Severity::Warning)
            .with_code("some-check");

        assert_eq!(diag.line, 3);
        assert_eq!(diag.column, 0);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.code.as_deref(), Some("some-check"));
    }

    #[test]
    fn test_severity_default() {
        assert_eq!(Severity::default(), Severity::Error);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ParseResult {
            html: "<div></div>".to_string(),
            metadata: ParseMetadata {
                parse_time: 1.5,
                cache_hit: Some(true),
                headings: vec![HeadingInfo {
                    level: 1,
                    text: "T".to_string(),
                    line: 0,
                }],
                references: vec![],
            },
            diagnostics: vec![Diagnostic::new(0, 0, "m").with_severity(Severity::Warning)],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metadata"]["parseTime"], 1.5);
        assert_eq!(json["metadata"]["cacheHit"], true);
        assert_eq!(json["metadata"]["headings"][0]["level"], 1);
        assert_eq!(json["diagnostics"][0]["severity"], "warning");
        assert!(json["diagnostics"][0].get("code").is_none());
    }

    #[test]
    fn test_cache_hit_flag_omitted_when_unset() {
        let json = serde_json::to_value(ParseResult::default()).unwrap();
        assert!(json["metadata"].get("cacheHit").is_none());
    }

    #[test]
    fn test_as_cache_hit_leaves_original_untouched() {
        let original = ParseResult::default();
        let hit = original.as_cache_hit();
        assert_eq!(hit.metadata.cache_hit, Some(true));
        assert_eq!(original.metadata.cache_hit, None);
    }

    #[test]
    fn test_options_deserialize() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"enableCache": false, "sourceUri": "file:///a.otl"}"#)
                .unwrap();
        assert_eq!(options.enable_cache, Some(false));
        assert_eq!(options.source_uri.as_deref(), Some("file:///a.otl"));

        let empty: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ParseOptions::default());
    }
}
