//! Default literals of scalar items

use serde_yaml::Value;
use std::fmt::{self, Display, Formatter};

/// Scalar default value captured from a schema
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// String literal
    String(String),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// Boolean literal
    Bool(bool),
}

impl Literal {
    /// Capture a literal from a YAML value
    ///
    /// Sequences, maps and nulls carry no scalar literal.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::String(s.clone())),
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float)),
            Value::Tagged(tagged) => Self::from_value(&tagged.value),
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }

    /// Render as a source literal
    #[must_use]
    pub fn write(&self) -> String {
        self.to_string()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}
