//! Schema id constants
//!
//! One constant per top-level object tying the generated types to the id
//! of the schema they came from.

use schemagen_ir::{to_go_name, ObjectRef};

/// `<Type>SchemaID <runtime>.SchemaID = "<id>"`
#[must_use]
pub fn render_schema_name(object: &ObjectRef, runtime: &str) -> String {
    let id = object.type_name();
    format!(
        "{}SchemaID {runtime}.SchemaID = \"{id}\"",
        to_go_name(&id, "")
    )
}

/// Wrap declarations in a `const` block; no declarations give no block
#[must_use]
pub fn const_block(declarations: &[String]) -> String {
    if declarations.is_empty() {
        return String::new();
    }
    let body: String = declarations
        .iter()
        .map(|declaration| format!("\t{declaration}\n"))
        .collect();
    format!("const (\n{body})\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemagen_ir::ObjectItem;

    #[test]
    fn schema_name() {
        let object = ObjectRef::new(ObjectItem::new("network_port"));
        assert_eq!(
            render_schema_name(&object, "goext"),
            "NetworkPortSchemaID goext.SchemaID = \"network_port\""
        );
    }

    #[test]
    fn const_blocks() {
        assert_eq!(const_block(&[]), "");
        assert_eq!(
            const_block(&["A = 1".to_string(), "B = 2".to_string()]),
            "const (\n\tA = 1\n\tB = 2\n)\n"
        );
    }
}
