//! Error types for template expansion and format-spec parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in the template text
pub type Span = std::ops::Range<usize>;

/// Errors from parsing a format specification string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// Input remained after the last grammar stage consumed its token
    #[error("could not decode format specification {spec:?}")]
    Trailing { spec: String },

    /// Width digit run does not fit in `usize`
    #[error("invalid width {width:?} in format specification")]
    InvalidWidth { width: String },

    /// Precision digit run does not fit in `usize`
    #[error("invalid precision {precision:?} in format specification")]
    InvalidPrecision { precision: String },
}

/// Errors from resolving a field name or index to an argument value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Positional index past the end of the argument list
    #[error("format index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Field name used against a positional source is not a number
    #[error("invalid index: {name:?}")]
    InvalidIndex { name: String },

    /// Key missing from a name-keyed argument source
    #[error("key error: {name:?}")]
    KeyNotFound { name: String },

    /// Named field missing from a record argument source
    #[error("no field {name:?} on record argument")]
    MissingField { name: String },

    /// Implicit positional field used against a name-keyed source
    #[error("positional field {index} cannot be resolved by a named argument source")]
    NotPositional { index: usize },
}

/// Errors from rendering one value with one directive
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Value type cannot be formatted with the requested verb
    #[error("cannot format {type_name} value with verb '{verb}'")]
    UnsupportedVerb { verb: char, type_name: &'static str },

    /// Percent transform could not re-parse the rendered digits
    #[error("could not parse format prefix from {text:?}")]
    Percent { text: String },
}

/// Any error surfaced from template expansion, carrying the byte span of
/// the construct that failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Single `{` with no matching `}`
    #[error("single '{{' encountered in format string")]
    UnmatchedOpen { span: Span },

    /// Single `}` with no matching `{`
    #[error("single '}}' encountered in format string")]
    UnmatchedClose { span: Span },

    /// Malformed format specification inside a field
    #[error("invalid format specification: {source}")]
    Spec { source: SpecError, span: Span },

    /// Field name or index did not resolve to an argument
    #[error("cannot resolve argument: {source}")]
    Resolve { source: ResolveError, span: Span },

    /// Resolved value could not be rendered with the parsed directive
    #[error("cannot render field: {source}")]
    Render { source: RenderError, span: Span },
}

impl FormatError {
    /// Byte span of the offending template construct
    pub fn span(&self) -> Span {
        match self {
            FormatError::UnmatchedOpen { span }
            | FormatError::UnmatchedClose { span }
            | FormatError::Spec { span, .. }
            | FormatError::Resolve { span, .. }
            | FormatError::Render { span, .. } => span.clone(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn report(&self, template: &str, filename: &str) -> String {
        let span = self.span();
        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(template)), &mut buf)
            .unwrap_or_default();
        String::from_utf8(buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_error_names_spec() {
        let err = SpecError::Trailing {
            spec: "q".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not decode format specification \"q\""
        );
    }

    #[test]
    fn test_format_error_span_accessor() {
        let err = FormatError::UnmatchedOpen { span: 3..4 };
        assert_eq!(err.span(), 3..4);
    }

    #[test]
    fn test_report_is_renderable() {
        let err = FormatError::UnmatchedClose { span: 2..3 };
        let report = err.report("ab}cd", "template");
        assert!(!report.is_empty());
    }

    #[test]
    fn test_resolve_error_messages() {
        let err = ResolveError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "format index 3 out of range (0..2)");
        let err = ResolveError::KeyNotFound {
            name: "user".to_string(),
        };
        assert_eq!(err.to_string(), "key error: \"user\"");
    }
}
