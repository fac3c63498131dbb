//! Template driver: tokenize, resolve, render, assemble
//!
//! Expansion is all-or-nothing: the output buffer is local to one call
//! and only becomes the return value when every field rendered cleanly.

mod resolver;

pub use resolver::{ArgumentResolver, NamedArgs, PositionalArgs, Record, RecordArgs};

use crate::error::{FormatError, Span};
use crate::parser::lexer::{lex, split_field, Token};
use crate::parser::parse_spec;
use crate::renderer::{render, Buffer};

/// Expand every replacement field in `template` against `resolver`
///
/// Empty field names walk the resolver positionally with an internal
/// cursor; named fields go through [`ArgumentResolver::by_name`] and do
/// not advance the cursor.
pub fn expand(template: &str, resolver: &dyn ArgumentResolver) -> Result<String, FormatError> {
    let mut out = Buffer::new();
    let mut cursor = 0usize;

    for (token, span) in lex(template) {
        match token {
            Ok(Token::Text) => out.write_str(&template[span]),
            Ok(Token::EscapedOpen) => out.write_str("{"),
            Ok(Token::EscapedClose) => out.write_str("}"),
            Ok(Token::Field) => {
                let body = &template[span.start + 1..span.end - 1];
                let (name, spec) = split_field(body);

                let value = if name.is_empty() {
                    let index = cursor;
                    cursor += 1;
                    resolver.by_index(index)
                } else {
                    resolver.by_name(name)
                }
                .map_err(|source| FormatError::Resolve {
                    source,
                    span: span.clone(),
                })?;

                let directive = parse_spec(spec).map_err(|source| FormatError::Spec {
                    source,
                    span: spec_span(&span, name),
                })?;

                render(&value, &directive, &mut out).map_err(|source| FormatError::Render {
                    source,
                    span: span.clone(),
                })?;
            }
            Err(()) => {
                return Err(if template[span.clone()].starts_with('}') {
                    FormatError::UnmatchedClose { span }
                } else {
                    FormatError::UnmatchedOpen { span }
                });
            }
        }
    }

    Ok(out.into_string())
}

/// Span of the spec substring inside a field token
fn spec_span(field: &Span, name: &str) -> Span {
    let start = field.start + 1 + name.len();
    let start = if start < field.end - 1 { start + 1 } else { start };
    start..field.end - 1
}
