//! Go rendering of properties
//!
//! Struct fields, accessor headers and bodies, and constructor entries.
//! The property kind only decides the struct tag: top-level properties map
//! to database columns as well as JSON keys.

use crate::item::{GoItem, RUNTIME};
use schemagen_ir::{to_go_name, variable_name, PropertyKind, PropertyRef};

/// Go rendering of a property
pub trait GoProperty {
    /// Field identifier
    fn go_name(&self) -> String;

    /// Struct tag, backquoted
    fn annotation(&self) -> String;

    /// Struct field line
    fn field(&self, suffix: &str) -> String;

    /// `GetName() T`
    fn getter_header(&self, suffix: &str) -> String;

    /// `SetName(T)`, or `SetName(name T)` with `argument`
    fn setter_header(&self, suffix: &str, argument: bool) -> String;

    /// Getter method of a struct bound to `variable`, without receiver
    fn getter(&self, variable: &str, suffix: &str) -> String;

    /// Setter method of a struct bound to `variable`, without receiver
    fn setter(&self, variable: &str, interface_suffix: &str, type_suffix: &str) -> String;

    /// Field initializer for the constructor, if the field needs one
    fn constructor_entry(&self, suffix: &str) -> Option<String>;
}

impl GoProperty for PropertyRef {
    fn go_name(&self) -> String {
        to_go_name(&self.name(), "")
    }

    fn annotation(&self) -> String {
        let name = self.name();
        let omit = if self.item().is_null() { ",omitempty" } else { "" };
        let json = format!("json:\"{name}{omit}\"");
        match self.kind() {
            PropertyKind::Top => format!("`db:\"{name}\" {json}`"),
            PropertyKind::Nested => format!("`{json}`"),
        }
    }

    fn field(&self, suffix: &str) -> String {
        format!(
            "\t{} {} {}\n",
            self.go_name(),
            self.item().field_type(suffix),
            self.annotation()
        )
    }

    fn getter_header(&self, suffix: &str) -> String {
        format!(
            "{}() {}",
            to_go_name("get", &self.name()),
            self.item().field_interface_type(suffix)
        )
    }

    fn setter_header(&self, suffix: &str, argument: bool) -> String {
        let name = self.name();
        let argument = if argument {
            format!("{} ", variable_name(&name))
        } else {
            String::new()
        };
        format!(
            "{}({argument}{})",
            to_go_name("set", &name),
            self.item().field_interface_type(suffix)
        )
    }

    fn getter(&self, variable: &str, suffix: &str) -> String {
        let body = self
            .item()
            .getter(&format!("{variable}.{}", self.go_name()), "result", suffix, 1);
        format!("{} {{\n{body}\n}}", self.getter_header(suffix))
    }

    fn setter(&self, variable: &str, interface_suffix: &str, type_suffix: &str) -> String {
        let body = self.item().setter(
            &format!("{variable}.{}", self.go_name()),
            &variable_name(&self.name()),
            type_suffix,
            1,
        );
        format!("{} {{\n{body}\n}}", self.setter_header(interface_suffix, true))
    }

    fn constructor_entry(&self, suffix: &str) -> Option<String> {
        let item = self.item();
        let default = self
            .has_default()
            .then(|| item.default_value(suffix))
            .flatten();
        let value = match (default, item.wrapper()) {
            (Some(value), Some(wrapper)) => format!("{RUNTIME}.Make{wrapper}({value})"),
            (Some(value), None) => value,
            (None, Some(wrapper)) => format!("{RUNTIME}.MakeNull{wrapper}()"),
            (None, None) => return None,
        };
        Some(format!("{}: {value}", self.go_name()))
    }
}
