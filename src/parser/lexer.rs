//! Template tokenizer using logos
//!
//! Splits a template into literal runs, escaped braces, and replacement
//! fields. A single unmatched brace matches no pattern and surfaces as a
//! lexer error token whose slice tells the driver which kind it was.

use logos::Logos;

pub use crate::error::Span;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{{` — collapses to a literal `{`
    #[token("{{")]
    EscapedOpen,

    /// `}}` — collapses to a literal `}`
    #[token("}}")]
    EscapedClose,

    /// `{name:spec}` — one replacement field, body runs to the next `}`
    #[regex(r"\{\}|\{[^{}][^}]*\}")]
    Field,

    /// Literal run between braces
    #[regex(r"[^{}]+")]
    Text,
}

/// Lex a template into tokens with spans; unmatched braces come out as
/// `Err(())` items
pub fn lex(template: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(template).spanned()
}

/// The body of a field token (text between the braces), split at the
/// first `:` into name and spec
pub fn split_field(body: &str) -> (&str, &str) {
    match body.split_once(':') {
        Some((name, spec)) => (name, spec),
        None => (body, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(template: &str) -> Vec<Result<Token, ()>> {
        lex(template).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(tokens("hello world\n"), vec![Ok(Token::Text)]);
    }

    #[test]
    fn test_fields_and_text() {
        assert_eq!(
            tokens("{} and {}"),
            vec![Ok(Token::Field), Ok(Token::Text), Ok(Token::Field)]
        );
    }

    #[test]
    fn test_field_with_name_and_spec() {
        let toks: Vec<_> = lex("{name:>10}").collect();
        assert_eq!(toks, vec![(Ok(Token::Field), 0..10)]);
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(
            tokens("{{}}"),
            vec![Ok(Token::EscapedOpen), Ok(Token::EscapedClose)]
        );
    }

    #[test]
    fn test_escape_wrapping_field() {
        assert_eq!(
            tokens("{{{}}}"),
            vec![
                Ok(Token::EscapedOpen),
                Ok(Token::Field),
                Ok(Token::EscapedClose)
            ]
        );
    }

    #[test]
    fn test_field_body_takes_stray_open_brace() {
        // The body ends at the next `}`; a `{` inside it belongs to the
        // field and fails later, at resolution.
        assert_eq!(tokens("{a{b}"), vec![Ok(Token::Field)]);
    }

    #[test]
    fn test_unmatched_close_is_error() {
        assert!(tokens("ab}cd").contains(&Err(())));
    }

    #[test]
    fn test_unmatched_open_is_error() {
        assert!(tokens("ab{cd").contains(&Err(())));
    }

    #[test]
    fn test_split_field() {
        assert_eq!(split_field("name:>10"), ("name", ">10"));
        assert_eq!(split_field("name"), ("name", ""));
        assert_eq!(split_field(""), ("", ""));
        assert_eq!(split_field(":^5"), ("", "^5"));
        // Only the first colon splits; the rest belongs to the spec.
        assert_eq!(split_field("::>10"), ("", ":>10"));
    }
}
