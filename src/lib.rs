//! pyfmt - Python-style `str.format` template expansion
//!
//! This library reproduces Python's `str.format` substitution semantics:
//! a template of literal text and `{...}` replacement fields is expanded
//! against positional arguments, a name-keyed map, or a record's fields.
//! Each field may carry a format specification
//! (`[[fill]align][sign]['#'][0][width]['.'precision][verb]`) controlling
//! padding, sign display, radix prefixes, precision, and conversion.
//!
//! # Example
//!
//! ```rust
//! use pyfmt::format;
//!
//! let out = format("{} scored {:>5.1f}", &["ada".into(), 91.25.into()]).unwrap();
//! assert_eq!(out, "ada scored  91.2");
//! ```

pub mod error;
pub mod parser;
pub mod renderer;
pub mod template;
pub mod value;

pub use error::{FormatError, RenderError, ResolveError, SpecError, Span};
pub use parser::{parse_spec, Align, Directive, Sign, Verb};
pub use template::{expand, ArgumentResolver, NamedArgs, PositionalArgs, Record, RecordArgs};
pub use value::Value;

use std::collections::HashMap;

/// Expand `template` against a positional argument list
///
/// `{}` fields take arguments in order; `{0}`-style fields index the list
/// without advancing the implicit cursor.
///
/// # Example
///
/// ```rust
/// use pyfmt::format;
///
/// assert_eq!(format("{0} {1} {0}", &["x".into(), "y".into()]).unwrap(), "x y x");
/// ```
pub fn format(template: &str, args: &[Value]) -> Result<String, FormatError> {
    expand(template, &PositionalArgs::new(args))
}

/// Expand `template` against a name-keyed argument map
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use pyfmt::format_map;
///
/// let mut args = HashMap::new();
/// args.insert("name".to_string(), "ada".into());
/// assert_eq!(format_map("hello {name}", &args).unwrap(), "hello ada");
/// ```
pub fn format_map(template: &str, args: &HashMap<String, Value>) -> Result<String, FormatError> {
    expand(template, &NamedArgs::new(args))
}

/// Expand `template` against a record's named fields
///
/// The record supplies its fields through the [`Record`] trait, the
/// caller-provided stand-in for runtime reflection.
pub fn format_record(template: &str, record: &dyn Record) -> Result<String, FormatError> {
    expand(template, &RecordArgs::new(record))
}

/// Like [`format`], but panics on error
///
/// For call sites with pre-validated templates that want the concise
/// shape over error plumbing.
pub fn must_format(template: &str, args: &[Value]) -> String {
    match format(template, args) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`format_map`], but panics on error
pub fn must_format_map(template: &str, args: &HashMap<String, Value>) -> String {
    match format_map(template, args) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`format_record`], but panics on error
pub fn must_format_record(template: &str, record: &dyn Record) -> String {
    match format_record(template, record) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_positional() {
        assert_eq!(
            format("{} and {}", &["a".into(), "b".into()]).unwrap(),
            "a and b"
        );
    }

    #[test]
    fn test_format_indexed() {
        assert_eq!(
            format("{0} {1} {0}", &["x".into(), "y".into()]).unwrap(),
            "x y x"
        );
    }

    #[test]
    fn test_format_map() {
        let mut args = HashMap::new();
        args.insert("who".to_string(), Value::from("world"));
        assert_eq!(format_map("hello {who}", &args).unwrap(), "hello world");
    }

    #[test]
    fn test_format_record() {
        struct Server {
            host: String,
            port: i64,
        }
        impl Record for Server {
            fn field(&self, name: &str) -> Option<Value> {
                match name {
                    "host" => Some(self.host.as_str().into()),
                    "port" => Some(self.port.into()),
                    _ => None,
                }
            }
        }
        let server = Server {
            host: "localhost".to_string(),
            port: 8080,
        };
        assert_eq!(
            format_record("{host}:{port}", &server).unwrap(),
            "localhost:8080"
        );
    }

    #[test]
    fn test_must_format() {
        assert_eq!(must_format("{:+d}", &[5i64.into()]), "+5");
    }

    #[test]
    #[should_panic(expected = "single '}'")]
    fn test_must_format_panics() {
        must_format("oops}", &[]);
    }
}
