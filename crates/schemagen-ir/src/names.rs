//! Name helpers
//!
//! Type names inside the IR are underscored paths (`pet_owner_address`);
//! emitted identifiers are their camel-case forms.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Join `prefix` and `suffix` with `_`; an empty prefix yields `suffix`
#[must_use]
pub fn add_name(prefix: &str, suffix: &str) -> String {
    if prefix.is_empty() {
        suffix.to_string()
    } else {
        format!("{prefix}_{suffix}")
    }
}

/// Like [`add_name`], but an empty prefix yields an empty name
#[must_use]
pub fn try_add_name(prefix: &str, suffix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        add_name(prefix, suffix)
    }
}

/// Upper camel case identifier for `prefix_suffix`
#[must_use]
pub fn to_go_name(prefix: &str, suffix: &str) -> String {
    add_name(prefix, suffix)
        .replace('-', "_")
        .to_upper_camel_case()
}

/// Lower camel case variable name, kept clear of language keywords
#[must_use]
pub fn variable_name(name: &str) -> String {
    let result = name.replace('-', "_").to_lower_camel_case();
    if KEYWORDS.contains(&result.as_str()) {
        result + "Object"
    } else {
        result
    }
}
