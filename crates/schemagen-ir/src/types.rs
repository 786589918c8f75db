//! Type classifier
//!
//! Maps raw `type` values of schema definitions to canonical kinds.
//! A value is either a single token (`string`, `integer`, ...) or a list of
//! tokens where `null` marks the type as nullable.

use serde_yaml::Value;
use std::fmt::{self, Display, Formatter};

/// Canonical kind of a scalar item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `string`
    String,
    /// `integer`
    Int,
    /// `number`
    Float,
    /// `boolean`
    Bool,
    /// `abstract`: untyped value
    Abstract,
    /// Any other token, passed through unchanged
    Other(String),
}

impl ScalarKind {
    /// Canonical kind name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Abstract => "object",
            Self::Other(token) => token,
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carrier selected by a type token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeToken {
    /// `array`: holds one element item
    Array,
    /// `object`: holds named properties
    Object,
    /// Everything else
    Scalar(ScalarKind),
}

impl TypeToken {
    fn from_token(token: &str) -> Self {
        match token {
            "array" => Self::Array,
            "object" => Self::Object,
            "string" => Self::Scalar(ScalarKind::String),
            "integer" => Self::Scalar(ScalarKind::Int),
            "number" => Self::Scalar(ScalarKind::Float),
            "boolean" => Self::Scalar(ScalarKind::Bool),
            "abstract" => Self::Scalar(ScalarKind::Abstract),
            other => Self::Scalar(ScalarKind::Other(other.to_string())),
        }
    }
}

/// Result of classifying a raw type value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeClass {
    /// Selected carrier and kind
    pub token: TypeToken,
    /// Whether `null` appeared in a type union
    pub nullable: bool,
}

/// Classify a raw `type` value
///
/// Returns `None` when the value is neither a string nor a list holding a
/// non-`null` string. The first non-`null` string of a list wins; both the
/// string `"null"` and a YAML null mark the type nullable.
#[must_use]
pub fn classify_type(value: &Value) -> Option<TypeClass> {
    match value {
        Value::String(token) => Some(TypeClass {
            token: TypeToken::from_token(token),
            nullable: false,
        }),
        Value::Sequence(tokens) => {
            let mut nullable = false;
            let mut first = None;
            for token in tokens {
                match token {
                    Value::Null => nullable = true,
                    Value::String(token) if token == "null" => nullable = true,
                    Value::String(token) if first.is_none() => first = Some(token.as_str()),
                    _ => {}
                }
            }
            first.map(|token| TypeClass {
                token: TypeToken::from_token(token),
                nullable,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn single_tokens_map_to_kinds() {
        let cases = [
            ("string", TypeToken::Scalar(ScalarKind::String)),
            ("integer", TypeToken::Scalar(ScalarKind::Int)),
            ("number", TypeToken::Scalar(ScalarKind::Float)),
            ("boolean", TypeToken::Scalar(ScalarKind::Bool)),
            ("abstract", TypeToken::Scalar(ScalarKind::Abstract)),
            ("array", TypeToken::Array),
            ("object", TypeToken::Object),
        ];
        for (token, expected) in cases {
            let class = classify_type(&Value::String(token.to_string())).unwrap();
            assert_eq!(class.token, expected, "token {token}");
            assert!(!class.nullable);
        }
    }

    #[test]
    fn unknown_token_passes_through() {
        let class = classify_type(&yaml("date")).unwrap();
        assert_eq!(class.token, TypeToken::Scalar(ScalarKind::Other("date".into())));
        assert_eq!(ScalarKind::Other("date".into()).as_str(), "date");
    }

    #[test]
    fn union_with_null_is_nullable() {
        let class = classify_type(&yaml("[integer, 'null']")).unwrap();
        assert_eq!(class.token, TypeToken::Scalar(ScalarKind::Int));
        assert!(class.nullable);
    }

    #[test]
    fn null_first_in_union() {
        let class = classify_type(&yaml("['null', string, integer]")).unwrap();
        assert_eq!(class.token, TypeToken::Scalar(ScalarKind::String));
        assert!(class.nullable);
    }

    #[test]
    fn non_string_entries_are_ignored() {
        let class = classify_type(&yaml("[1, boolean]")).unwrap();
        assert_eq!(class.token, TypeToken::Scalar(ScalarKind::Bool));
        assert!(!class.nullable);
    }

    #[test]
    fn yaml_null_marks_nullable() {
        let class = classify_type(&yaml("[number, null]")).unwrap();
        assert_eq!(class.token, TypeToken::Scalar(ScalarKind::Float));
        assert!(class.nullable);
    }

    #[test]
    fn only_null_is_unsupported() {
        assert!(classify_type(&yaml("['null']")).is_none());
        assert!(classify_type(&yaml("['null', null]")).is_none());
    }

    #[test]
    fn other_shapes_are_unsupported() {
        assert!(classify_type(&yaml("1")).is_none());
        assert!(classify_type(&yaml("{a: b}")).is_none());
        assert!(classify_type(&yaml("[]")).is_none());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ScalarKind::Int.to_string(), "int");
        assert_eq!(ScalarKind::Float.to_string(), "float");
        assert_eq!(ScalarKind::Abstract.to_string(), "object");
    }
}
