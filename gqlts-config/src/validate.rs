//! Validation utilities for TypeScript identifiers in config values

use miette::SourceSpan;

use crate::{Result, SourceContext};

/// Validation context that carries source information.
///
/// Lets validation errors point at the offending value in the config file.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self { source }
    }

    /// Find the span of a quoted value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), value)
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<crate::Error> {
        self.source.validation_error(message, span)
    }

    /// Validate that `value` can be used as a TypeScript identifier (or as
    /// the start of one when `allow_empty` is set).
    pub fn validate_identifier(&self, value: &str, key: &str, allow_empty: bool) -> Result<()> {
        if value.is_empty() && allow_empty {
            return Ok(());
        }

        if is_typescript_keyword(value) {
            return Err(self.source.validation_error(
                format!("'{}' is a TypeScript reserved word and cannot be used as {}", value, key),
                self.find_span(value),
            ));
        }

        if let Some(reason) = validate_identifier(value) {
            return Err(self.source.validation_error(
                format!("invalid {} '{}': {}", key, value, reason),
                self.find_span(value),
            ));
        }

        Ok(())
    }
}

/// TypeScript reserved words that cannot name a namespace or a type.
const TS_KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "implements", "interface", "let", "package",
    "private", "protected", "public", "static", "yield", "any", "boolean", "never", "number",
    "object", "string", "symbol", "undefined", "unknown",
];

pub(crate) fn is_typescript_keyword(name: &str) -> bool {
    TS_KEYWORDS.contains(&name)
}

/// Find the span of a quoted string value in TOML or JSON source.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        // +1 to skip the opening quote
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Returns None if valid, Some(reason) if invalid
fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("must start with a letter, underscore or dollar sign"),
        None => return Some("cannot be empty"),
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        None
    } else {
        Some("must contain only letters, numbers, underscores and dollar signs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Schema").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("$store").is_none());
        assert!(validate_identifier("Api2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("my-schema").is_some());
        assert!(validate_identifier("a.b").is_some());
    }

    #[test]
    fn test_keywords() {
        assert!(!is_typescript_keyword("namespace"));
        assert!(is_typescript_keyword("class"));
        assert!(is_typescript_keyword("string"));
    }

    #[test]
    fn test_find_value_span() {
        let src = r#"schemaNamespace = "my-schema""#;
        let span = find_value_span(src, "my-schema").unwrap();
        assert_eq!(span.offset(), 19);
        assert_eq!(span.len(), 9);
    }

    #[test]
    fn test_context_reports_span() {
        let source = SourceContext::new(r#"{ "schemaNamespace": "class" }"#, "codegen.json");
        let ctx = ParseContext::new(&source);
        let err = ctx
            .validate_identifier("class", "schemaNamespace", false)
            .unwrap_err();
        match *err {
            crate::Error::Validation { span, message, .. } => {
                assert!(message.contains("reserved word"));
                assert_eq!(span.map(|s| s.offset()), Some(22));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_prefix_is_allowed() {
        let source = SourceContext::new("", "codegen.toml");
        let ctx = ParseContext::new(&source);
        assert!(ctx.validate_identifier("", "interfacePrefix", true).is_ok());
        assert!(ctx.validate_identifier("", "schemaNamespace", false).is_err());
    }
}
