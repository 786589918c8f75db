//! Go rendering of IR items
//!
//! [`GoItem`] gives every item its Go spelling: the concrete type stored in
//! a struct, the type exposed through interfaces, the constructor default
//! and the statements copying values between the two.

use schemagen_ir::{to_go_name, Item, ItemRef, ObjectItem, ObjectRef, ScalarKind};

/// Empty interface, the type of untyped values and empty objects
pub const ANY: &str = "interface{}";

/// Package of the runtime providing the nullable wrappers
pub const RUNTIME: &str = "goext";

/// Go spelling of a scalar kind
#[must_use]
pub fn scalar_type(kind: &ScalarKind) -> String {
    match kind {
        ScalarKind::String => "string".to_string(),
        ScalarKind::Int => "int".to_string(),
        ScalarKind::Float => "float64".to_string(),
        ScalarKind::Bool => "bool".to_string(),
        ScalarKind::Abstract => ANY.to_string(),
        ScalarKind::Other(token) => token.clone(),
    }
}

/// Name of the runtime wrapper family of a scalar kind (`Float`, `String`)
///
/// Untyped values have no wrapper.
#[must_use]
pub fn wrapper_name(kind: &ScalarKind) -> Option<String> {
    if *kind == ScalarKind::Abstract {
        return None;
    }
    let go_type = scalar_type(kind);
    let trimmed = go_type.strip_suffix("64").unwrap_or(&go_type);
    Some(to_go_name(trimmed, ""))
}

/// Tab indentation for `depth`
pub(crate) fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}

/// Loop index variable at `depth`: `i`, `j`, `k`, ...
pub(crate) fn index_variable(depth: usize) -> char {
    let offset = u8::try_from(depth.saturating_sub(1)).unwrap_or(u8::MAX - b'i');
    char::from(b'i'.saturating_add(offset))
}

/// Left-hand side of a getter statement
///
/// Nested levels assign into `argument`; the outermost level either
/// declares it (`create`) or returns directly.
pub(crate) fn result_prefix(argument: &str, depth: usize, create: bool) -> String {
    if depth > 1 {
        format!("{argument} =")
    } else if create {
        format!("{argument} :=")
    } else {
        "return".to_string()
    }
}

/// Go names of one object type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectNames {
    type_name: String,
    empty: bool,
}

impl ObjectNames {
    /// Names of `object`
    #[must_use]
    pub fn of(object: &ObjectRef) -> Self {
        Self {
            type_name: object.type_name(),
            empty: object.is_empty(),
        }
    }

    fn from_item(object: &ObjectItem) -> Self {
        Self {
            type_name: object.type_name().to_string(),
            empty: object.is_empty(),
        }
    }

    /// Underscored type name
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Identifier of the struct: `PetOwner` plus the suffix
    #[must_use]
    pub fn name(&self, suffix: &str) -> String {
        to_go_name(&self.type_name, suffix)
    }

    /// Pointer to the struct, or `interface{}` when empty
    #[must_use]
    pub fn go_type(&self, suffix: &str) -> String {
        if self.empty {
            ANY.to_string()
        } else {
            format!("*{}", self.name(suffix))
        }
    }

    /// Interface of the struct, or `interface{}` when empty
    #[must_use]
    pub fn interface_type(&self, suffix: &str) -> String {
        if self.empty {
            ANY.to_string()
        } else {
            format!("I{}", self.name(suffix))
        }
    }

    /// Constructor call, or an empty map when empty
    #[must_use]
    pub fn default_value(&self, suffix: &str) -> String {
        if self.empty {
            "map[string]interface{}{}".to_string()
        } else {
            format!("Make{}()", self.name(suffix))
        }
    }
}

/// Go rendering of an item
pub trait GoItem {
    /// Concrete type
    fn go_type(&self, suffix: &str) -> String;

    /// Type seen through interfaces
    fn interface_type(&self, suffix: &str) -> String;

    /// Type of a struct field holding the item
    ///
    /// Null-capable scalars are wrapped in the runtime `Maybe` types.
    fn field_type(&self, suffix: &str) -> String;

    /// Type of a field seen through interfaces
    fn field_interface_type(&self, suffix: &str) -> String;

    /// Runtime wrapper family, for null-capable typed scalars only
    fn wrapper(&self) -> Option<String>;

    /// Constructor default; scalars without a literal have none
    fn default_value(&self, suffix: &str) -> Option<String>;

    /// Statements reading `variable` into `argument`
    fn getter(&self, variable: &str, argument: &str, suffix: &str, depth: usize) -> String;

    /// Statements storing `argument` into `variable`
    fn setter(&self, variable: &str, argument: &str, suffix: &str, depth: usize) -> String;
}

impl GoItem for ItemRef {
    fn go_type(&self, suffix: &str) -> String {
        match &*self.borrow() {
            Item::Scalar(scalar) => scalar_type(scalar.kind()),
            Item::Array(array) => format!("[]{}", array.element().go_type(suffix)),
            Item::Object(object) => ObjectNames::from_item(object).go_type(suffix),
        }
    }

    fn interface_type(&self, suffix: &str) -> String {
        match &*self.borrow() {
            Item::Scalar(scalar) => scalar_type(scalar.kind()),
            Item::Array(array) => format!("[]{}", array.element().interface_type(suffix)),
            Item::Object(object) => ObjectNames::from_item(object).interface_type(suffix),
        }
    }

    fn field_type(&self, suffix: &str) -> String {
        match self.wrapper() {
            Some(wrapper) => format!("{RUNTIME}.Maybe{wrapper}"),
            None => self.go_type(suffix),
        }
    }

    fn field_interface_type(&self, suffix: &str) -> String {
        if self.wrapper().is_some() {
            self.field_type(suffix)
        } else {
            self.interface_type(suffix)
        }
    }

    fn wrapper(&self) -> Option<String> {
        match &*self.borrow() {
            Item::Scalar(scalar) if scalar.is_null() => wrapper_name(scalar.kind()),
            _ => None,
        }
    }

    fn default_value(&self, suffix: &str) -> Option<String> {
        match &*self.borrow() {
            Item::Scalar(scalar) => scalar.default_literal().map(|literal| literal.write()),
            Item::Array(_) => Some(format!("{}{{}}", self.go_type(suffix))),
            Item::Object(object) => Some(ObjectNames::from_item(object).default_value(suffix)),
        }
    }

    fn getter(&self, variable: &str, argument: &str, suffix: &str, depth: usize) -> String {
        let indent = indent(depth);
        let item = self.borrow();
        let Item::Array(array) = &*item else {
            return format!("{indent}{} {variable}", result_prefix(argument, depth, false));
        };

        let element = array.element();
        let mut tail = String::new();
        if depth == 1 {
            if !element.contains_object() {
                return format!("{indent}return {variable}");
            }
            tail = format!("\n{indent}return {argument}");
        }
        let index = index_variable(depth);
        let body = element.getter(
            &format!("{variable}[{index}]"),
            &format!("{argument}[{index}]"),
            suffix,
            depth + 1,
        );
        format!(
            "{indent}{} make({}, len({variable}))\n{indent}for {index} := range {variable} {{\n{body}\n{indent}}}{tail}",
            result_prefix(argument, depth, true),
            self.interface_type(suffix),
        )
    }

    fn setter(&self, variable: &str, argument: &str, suffix: &str, depth: usize) -> String {
        let indent = indent(depth);
        let assignment = format!("{indent}{variable} = {argument}");
        match &*self.borrow() {
            Item::Scalar(_) => assignment,
            Item::Object(object) if object.is_empty() => assignment,
            Item::Object(object) => format!(
                "{indent}{variable}, _ = {argument}.({})",
                ObjectNames::from_item(object).go_type(suffix)
            ),
            Item::Array(array) if !array.element().contains_object() => assignment,
            Item::Array(array) => {
                let index = index_variable(depth);
                let body = array.element().setter(
                    &format!("{variable}[{index}]"),
                    &format!("{argument}[{index}]"),
                    suffix,
                    depth + 1,
                );
                format!(
                    "{indent}{variable} = make({}, len({argument}))\n{indent}for {index} := range {argument} {{\n{body}\n{indent}}}",
                    self.go_type(suffix),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemagen_ir::{ArrayItem, Literal, PropertyKind, PropertyRef, ScalarItem};

    fn scalar(kind: ScalarKind, nullable: bool) -> ItemRef {
        ItemRef::new(Item::Scalar(ScalarItem::new(kind, nullable).with_required(true)))
    }

    fn array(element: ItemRef) -> ItemRef {
        ItemRef::new(Item::Array(ArrayItem::new(element)))
    }

    fn object(name: &str, properties: &[&str]) -> ItemRef {
        let mut object = ObjectItem::new(name);
        for property in properties {
            object = object.with_property(PropertyRef::new(
                *property,
                scalar(ScalarKind::String, false),
                PropertyKind::Nested,
            ));
        }
        ItemRef::new(Item::Object(object))
    }

    #[test]
    fn helpers() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "\t\t");
        assert_eq!(index_variable(1), 'i');
        assert_eq!(index_variable(3), 'k');
        assert_eq!(result_prefix("result", 2, true), "result =");
        assert_eq!(result_prefix("result", 1, true), "result :=");
        assert_eq!(result_prefix("result", 1, false), "return");
    }

    #[test]
    fn scalar_types() {
        assert_eq!(scalar_type(&ScalarKind::Float), "float64");
        assert_eq!(scalar_type(&ScalarKind::Abstract), "interface{}");
        assert_eq!(scalar_type(&ScalarKind::Other("date".into())), "date");
        assert_eq!(wrapper_name(&ScalarKind::Float).as_deref(), Some("Float"));
        assert_eq!(wrapper_name(&ScalarKind::Int).as_deref(), Some("Int"));
        assert_eq!(wrapper_name(&ScalarKind::Abstract), None);
    }

    #[test]
    fn null_capable_scalars_are_wrapped() {
        let required = scalar(ScalarKind::Int, false);
        assert_eq!(required.field_type(""), "int");
        assert_eq!(required.field_interface_type(""), "int");

        let nullable = scalar(ScalarKind::Float, true);
        assert_eq!(nullable.field_type(""), "goext.MaybeFloat");
        assert_eq!(nullable.field_interface_type(""), "goext.MaybeFloat");

        let optional = ItemRef::new(Item::Scalar(ScalarItem::new(ScalarKind::String, false)));
        assert_eq!(optional.field_type(""), "goext.MaybeString");

        let untyped = scalar(ScalarKind::Abstract, true);
        assert_eq!(untyped.field_type(""), "interface{}");
    }

    #[test]
    fn object_types() {
        let full = object("pet_owner", &["name"]);
        assert_eq!(full.go_type("raw"), "*PetOwnerRaw");
        assert_eq!(full.interface_type(""), "IPetOwner");
        assert_eq!(full.default_value("").as_deref(), Some("MakePetOwner()"));

        let empty = object("pet_blob", &[]);
        assert_eq!(empty.go_type(""), "interface{}");
        assert_eq!(empty.interface_type(""), "interface{}");
        assert_eq!(empty.default_value("").as_deref(), Some("map[string]interface{}{}"));
    }

    #[test]
    fn array_types() {
        let nested = array(array(object("pet_toy", &["color"])));
        assert_eq!(nested.go_type(""), "[][]*PetToy");
        assert_eq!(nested.interface_type("gen"), "[][]IPetToyGen");
        assert_eq!(nested.default_value("").as_deref(), Some("[][]*PetToy{}"));
    }

    #[test]
    fn scalar_defaults() {
        let plain = scalar(ScalarKind::String, false);
        assert_eq!(plain.default_value(""), None);

        let with_default = ItemRef::new(Item::Scalar(
            ScalarItem::new(ScalarKind::String, false).with_default(Literal::String("x".into())),
        ));
        assert_eq!(with_default.default_value("").as_deref(), Some("\"x\""));
    }

    #[test]
    fn plain_accessors() {
        let item = scalar(ScalarKind::String, false);
        assert_eq!(item.getter("pet.Name", "result", "", 1), "\treturn pet.Name");
        assert_eq!(item.setter("pet.Name", "name", "", 1), "\tpet.Name = name");
    }

    #[test]
    fn object_setter_asserts_type() {
        let item = object("pet_owner", &["name"]);
        assert_eq!(
            item.setter("pet.Owner", "owner", "", 1),
            "\tpet.Owner, _ = owner.(*PetOwner)"
        );
        let empty = object("pet_blob", &[]);
        assert_eq!(empty.setter("pet.Blob", "blob", "", 1), "\tpet.Blob = blob");
    }

    #[test]
    fn array_without_objects_is_copied_whole() {
        let item = array(scalar(ScalarKind::Bool, false));
        assert_eq!(item.getter("pet.Tags", "result", "", 1), "\treturn pet.Tags");
        assert_eq!(item.setter("pet.Tags", "tags", "", 1), "\tpet.Tags = tags");
    }

    #[test]
    fn array_of_objects_loops() {
        let item = array(object("pet_toy", &["color"]));
        assert_eq!(
            item.getter("pet.Toys", "result", "Gen", 1),
            "\tresult := make([]IPetToyGen, len(pet.Toys))\n\
             \tfor i := range pet.Toys {\n\
             \t\tresult[i] = pet.Toys[i]\n\
             \t}\n\
             \treturn result"
        );
        assert_eq!(
            item.setter("pet.Toys", "toys", "", 1),
            "\tpet.Toys = make([]*PetToy, len(toys))\n\
             \tfor i := range toys {\n\
             \t\tpet.Toys[i], _ = toys[i].(*PetToy)\n\
             \t}"
        );
    }
}
