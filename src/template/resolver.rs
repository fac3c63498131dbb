//! Argument sources for template expansion
//!
//! One capability trait with three implementations: a positional value
//! slice, a name-keyed map, and a caller-supplied record. New sources
//! plug in without touching the driver.

use std::collections::HashMap;

use crate::error::ResolveError;
use crate::value::Value;

/// Hands one argument value to the driver for a field's name or index
pub trait ArgumentResolver {
    /// Resolve an implicit positional field (`{}`), given the driver's
    /// cursor position
    fn by_index(&self, index: usize) -> Result<Value, ResolveError>;

    /// Resolve an explicitly named field (`{name}` or `{0}`)
    fn by_name(&self, name: &str) -> Result<Value, ResolveError>;
}

/// Field introspection over a caller's record type
///
/// Rust has no runtime reflection, so record-mode expansion asks the
/// caller for named fields through this trait.
pub trait Record {
    /// The value of the named field, if the record has one
    fn field(&self, name: &str) -> Option<Value>;
}

/// Positional argument list: `{}` walks it in order, `{0}`/`{1}` index it
pub struct PositionalArgs<'a> {
    args: &'a [Value],
}

impl<'a> PositionalArgs<'a> {
    pub fn new(args: &'a [Value]) -> Self {
        PositionalArgs { args }
    }
}

impl ArgumentResolver for PositionalArgs<'_> {
    fn by_index(&self, index: usize) -> Result<Value, ResolveError> {
        self.args
            .get(index)
            .cloned()
            .ok_or(ResolveError::IndexOutOfRange {
                index,
                len: self.args.len(),
            })
    }

    fn by_name(&self, name: &str) -> Result<Value, ResolveError> {
        let index = name.parse().map_err(|_| ResolveError::InvalidIndex {
            name: name.to_string(),
        })?;
        self.by_index(index)
    }
}

/// Name-keyed argument map for `{name}` style fields
pub struct NamedArgs<'a> {
    args: &'a HashMap<String, Value>,
}

impl<'a> NamedArgs<'a> {
    pub fn new(args: &'a HashMap<String, Value>) -> Self {
        NamedArgs { args }
    }
}

impl ArgumentResolver for NamedArgs<'_> {
    fn by_index(&self, index: usize) -> Result<Value, ResolveError> {
        Err(ResolveError::NotPositional { index })
    }

    fn by_name(&self, name: &str) -> Result<Value, ResolveError> {
        self.args
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::KeyNotFound {
                name: name.to_string(),
            })
    }
}

/// Record-field argument source for `{field}` style fields
pub struct RecordArgs<'a> {
    record: &'a dyn Record,
}

impl<'a> RecordArgs<'a> {
    pub fn new(record: &'a dyn Record) -> Self {
        RecordArgs { record }
    }
}

impl ArgumentResolver for RecordArgs<'_> {
    fn by_index(&self, index: usize) -> Result<Value, ResolveError> {
        Err(ResolveError::NotPositional { index })
    }

    fn by_name(&self, name: &str) -> Result<Value, ResolveError> {
        self.record
            .field(name)
            .ok_or_else(|| ResolveError::MissingField {
                name: name.to_string(),
            })
    }
}
