//! Go rendering of objects
//!
//! Every non-empty object becomes a struct, a raw interface listing its
//! accessors, a mutable interface embedding the raw one, accessor methods
//! and a constructor.

use crate::item::ObjectNames;
use crate::property::GoProperty;
use schemagen_ir::{add_name, variable_name, ObjectRef};

/// Struct definition
#[must_use]
pub fn render_struct(object: &ObjectRef, suffix: &str) -> String {
    let mut code = format!("type {} struct {{\n", ObjectNames::of(object).name(suffix));
    for property in object.properties() {
        code.push_str(&property.field(suffix));
    }
    code + "}\n"
}

/// Interface listing getter and setter of every property
#[must_use]
pub fn render_interface(object: &ObjectRef, suffix: &str) -> String {
    let mut code = format!(
        "type {} interface {{\n",
        ObjectNames::of(object).interface_type(suffix)
    );
    for property in object.properties() {
        code.push_str(&format!(
            "\t{}\n\t{}\n",
            property.getter_header(suffix),
            property.setter_header(suffix, false)
        ));
    }
    code + "}\n"
}

/// Interface named after the struct, embedding the raw interface
#[must_use]
pub fn render_mutable_interface(
    object: &ObjectRef,
    interface_suffix: &str,
    type_suffix: &str,
) -> String {
    let names = ObjectNames::of(object);
    format!(
        "type {} interface {{\n\t{}\n}}\n",
        names.interface_type(type_suffix),
        names.interface_type(interface_suffix)
    )
}

/// Getter and setter methods on the struct pointer
#[must_use]
pub fn render_implementation(
    object: &ObjectRef,
    interface_suffix: &str,
    type_suffix: &str,
) -> String {
    let names = ObjectNames::of(object);
    let variable = variable_name(&add_name(names.type_name(), type_suffix));
    let prefix = format!("func ({variable} {}) ", names.go_type(type_suffix));

    let mut code = String::new();
    for property in object.properties() {
        code.push_str(&format!(
            "{prefix}{}\n\n{prefix}{}\n\n",
            property.getter(&variable, interface_suffix),
            property.setter(&variable, interface_suffix, type_suffix)
        ));
    }
    code.pop();
    code
}

/// `Make<Type>()` returning a struct with defaults and null values set
#[must_use]
pub fn render_constructor(object: &ObjectRef, suffix: &str) -> String {
    let names = ObjectNames::of(object);
    let name = names.name(suffix);
    let mut code = format!(
        "func Make{name}() {} {{\n\treturn &{name}{{\n",
        names.go_type(suffix)
    );
    for entry in object
        .properties()
        .iter()
        .filter_map(|property| property.constructor_entry(suffix))
    {
        code.push_str(&format!("\t\t{entry},\n"));
    }
    code + "\t}\n}\n"
}
