//! Error types for IR parsing, mutation and collection
//!
//! Every variant carries the underscored path of the node it concerns, so
//! the failing location can be reconstructed from the message alone.

/// Errors raised while building or walking the IR
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IrError {
    /// Type value is neither a token nor a list holding a non-null token
    #[error("item {path}: unsupported type: {found}")]
    UnsupportedType {
        /// Underscored path of the item
        path: String,
        /// Description of the offending value
        found: String,
    },

    /// Definition has no `type` key
    #[error("item {path} does not have a type")]
    MissingType {
        /// Underscored path of the item
        path: String,
    },

    /// Array definition has no `items` map
    #[error("array {path} does not have items")]
    ArrayWithoutItems {
        /// Underscored path of the item
        path: String,
    },

    /// Array `items` map has no `type` key
    #[error("items of array {path} do not have a type")]
    ItemsWithoutType {
        /// Underscored path of the item
        path: String,
    },

    /// Object `properties` is not a map
    #[error("object {object} has invalid properties")]
    BadPropertiesShape {
        /// Type name of the object
        object: String,
    },

    /// Object has a property whose name is not a string
    #[error("object {object} has property which name is not a string")]
    BadPropertyName {
        /// Type name of the object
        object: String,
    },

    /// Property definition is not a map
    #[error("object {object} has invalid property {property}")]
    BadPropertyDefinition {
        /// Type name of the object
        object: String,
        /// Property name
        property: String,
    },

    /// Object `required` is not a list of strings
    #[error("object {object}: required should be a list of strings")]
    BadRequired {
        /// Type name of the object
        object: String,
    },

    /// Two distinct objects with one type name met during collection
    #[error("multiple objects with the same type {name} at object {object}")]
    DuplicateObjectType {
        /// Type name of the object
        object: String,
        /// Conflicting name
        name: String,
    },

    /// Two distinct properties with one name met in a single merge
    #[error("multiple properties with the same name {name} at {object}")]
    DuplicatePropertyName {
        /// Type name of the object
        object: String,
        /// Conflicting name
        name: String,
    },

    /// Properties were added to a scalar or an array
    #[error("cannot add properties to {item}")]
    CannotAddProperties {
        /// Fingerprint of the item
        item: String,
    },
}

impl IrError {
    /// Create unsupported type error, describing the offending YAML value
    pub fn unsupported_type(path: impl Into<String>, found: &serde_yaml::Value) -> Self {
        Self::UnsupportedType {
            path: path.into(),
            found: describe_value(found),
        }
    }
}

fn describe_value(value: &serde_yaml::Value) -> String {
    use serde_yaml::Value;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(s) => format!("string {s:?}"),
        Value::Sequence(items) => format!("list of {} elements", items.len()),
        Value::Mapping(_) => "map".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
