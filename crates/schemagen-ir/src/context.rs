//! Parse context threaded through the IR parsers

use serde_yaml::{Mapping, Value};

/// State handed from a node to the parser of its child
///
/// `level` counts from the schema root property (0) downwards; `prefix` is
/// the underscored path accumulated so far and becomes the type name of
/// objects parsed at this point.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// Underscored path of the enclosing node
    pub prefix: &'a str,
    /// Depth below the schema root property
    pub level: usize,
    /// Requiredness propagated from the enclosing object
    pub required: bool,
    /// Default literal or map matching this node
    pub defaults: Option<&'a Value>,
    /// Raw definition being parsed
    pub data: &'a Mapping,
}

impl<'a> ParseContext<'a> {
    /// Root context over `data`
    #[must_use]
    pub fn new(data: &'a Mapping) -> Self {
        Self {
            prefix: "",
            level: 0,
            required: false,
            defaults: None,
            data,
        }
    }

    /// Set prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Set level
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Set requiredness
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set defaults
    #[must_use]
    pub fn with_defaults(mut self, defaults: Option<&'a Value>) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the definition being parsed
    #[must_use]
    pub fn with_data(mut self, data: &'a Mapping) -> Self {
        self.data = data;
        self
    }

    /// Look up a key of the definition
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.data.get(key)
    }
}
