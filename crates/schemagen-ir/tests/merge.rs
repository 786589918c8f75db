//! Property merging across independently parsed schema roots

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use schemagen_ir::prelude::*;
use schemagen_test_utils::mapping;
use std::collections::BTreeSet;

fn root(name: &str, text: &str) -> PropertyRef {
    let data = mapping(text);
    PropertyRef::parse(name, &ParseContext::new(&data).with_required(true)).unwrap()
}

fn object_text(names: &BTreeSet<String>) -> String {
    if names.is_empty() {
        return String::from("type: object\nproperties: {}\n");
    }
    let mut text = String::from("type: object\nproperties:\n");
    for name in names {
        text.push_str(&format!("  '{name}': {{type: string}}\n"));
    }
    text
}

#[test]
fn base_properties_merge_into_child() {
    let base = root("base", "type: object\nproperties:\n  x: {type: string}\n  y: {type: integer}\n");
    let child = root(
        "child",
        "type: object\nrequired: [y]\nproperties:\n  x: {type: boolean}\n  z: {type: number}\n",
    );

    let inherited = base.collect_properties(2, 1).unwrap();
    child.add_properties(&inherited, false).unwrap();

    let merged = child.collect_properties(2, 1).unwrap();
    assert_eq!(merged.names(), vec!["x", "y", "z"]);

    let x = merged.get("x").unwrap();
    assert_eq!(x.item().fingerprint(), "#bool,true,");

    let y = merged.get("y").unwrap();
    assert!(!y.item().is_null());
    assert!(base.collect_properties(2, 1).unwrap().get("y").unwrap().item().is_null());
}

#[test]
fn strict_merge_reports_collision() {
    let child = root("child", "type: object\nproperties:\n  house_id: {type: string}\n");
    let parent = root("house_id", "type: string");
    let set = [parent].into_iter().collect();

    let err = child.add_properties(&set, true).unwrap_err();
    assert_eq!(
        err,
        IrError::DuplicatePropertyName {
            object: "child".into(),
            name: "house_id".into()
        }
    );
}

#[test]
fn merging_nothing_is_a_no_op() {
    let child = root("child", "type: object\nproperties:\n  a: {type: string}\n");
    child.add_properties(&Default::default(), true).unwrap();
    assert_eq!(child.collect_properties(2, 1).unwrap().names(), vec!["a"]);
}

proptest! {
    #[test]
    fn collected_names_match_definition(names in prop::collection::btree_set("[a-z]{1,8}", 0..12)) {
        let root = root("r", &object_text(&names));
        let collected = root.collect_properties(2, 1).unwrap().names();
        prop_assert_eq!(collected, names.iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn lenient_merge_is_idempotent(
        own in prop::collection::btree_set("[a-m]{1,4}", 0..6),
        inherited in prop::collection::btree_set("[a-m]{1,4}", 0..6),
    ) {
        let child = root("child", &object_text(&own));
        let base = root("base", &object_text(&inherited));
        let set = base.collect_properties(2, 1).unwrap();

        child.add_properties(&set, false).unwrap();
        let once = child.collect_properties(2, 1).unwrap().names();
        child.add_properties(&set, false).unwrap();
        let twice = child.collect_properties(2, 1).unwrap().names();

        let expected: Vec<_> = own.union(&inherited).cloned().collect();
        prop_assert_eq!(&once, &expected);
        prop_assert_eq!(once, twice);
    }
}
