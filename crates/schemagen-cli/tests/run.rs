//! Whole runs against schema files on disk

use pretty_assertions::assert_eq;
use schemagen_cli::{run, Cli};
use schemagen_test_utils::{schema_document, temp_files, BASE_SCHEMA, OWNER_SCHEMA, PET_SCHEMA};
use std::fs;
use std::path::Path;

fn project() -> tempfile::TempDir {
    temp_files(&[
        ("base.yaml", schema_document(&[BASE_SCHEMA]).as_str()),
        ("pets.yaml", schema_document(&[PET_SCHEMA, OWNER_SCHEMA]).as_str()),
        ("schemas.yaml", "schemas: [base.yaml, pets.yaml]"),
    ])
}

fn generated_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn writes_every_file() {
    let dir = project();
    let out = dir.path().join("out");
    let cli = Cli {
        config: Some(dir.path().join("schemas.yaml")),
        output: Some(out.join("pet").to_string_lossy().to_string()),
        ..Cli::default()
    };

    run(&cli).unwrap();

    assert_eq!(
        generated_files(&out),
        vec![
            "pet_constructors.go",
            "pet_crud.go",
            "pet_generated_interface.go",
            "pet_implementation.go",
            "pet_interface.go",
            "pet_names.go",
            "pet_raw.go",
            "pet_raw_crud.go",
        ]
    );
    let names = fs::read_to_string(out.join("pet_names.go")).unwrap();
    assert!(names.contains("PetSchemaID goext.SchemaID = \"pet\""));
    assert!(names.contains("BaseSchemaID goext.SchemaID = \"base\""));
}

#[test]
fn packages_come_from_flags() {
    let dir = project();
    let out = dir.path().join("out");
    let cli = Cli {
        config: Some(dir.path().join("schemas.yaml")),
        output: Some(out.join("x").to_string_lossy().to_string()),
        resource_package: Some("model".to_string()),
        raw_suffix: Some(String::new()),
        ..Cli::default()
    };

    run(&cli).unwrap();

    let raw = fs::read_to_string(out.join("x_raw.go")).unwrap();
    assert!(raw.starts_with("package model\n\ntype Base struct {\n"));
    let crud = fs::read_to_string(out.join("x_raw_crud.go")).unwrap();
    assert!(crud.contains("(*model.Pet, error)"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = project();
    let out = dir.path().join("out");
    let cli = Cli {
        config: Some(dir.path().join("schemas.yaml")),
        output: Some(out.join("pet").to_string_lossy().to_string()),
        dry_run: true,
        ..Cli::default()
    };

    run(&cli).unwrap();
    assert!(!out.exists());
}

#[test]
fn strict_run_fails_on_missing_file() {
    let dir = temp_files(&[("schemas.yaml", "schemas: [missing.yaml]")]);
    let lenient = Cli {
        config: Some(dir.path().join("schemas.yaml")),
        dry_run: true,
        ..Cli::default()
    };
    run(&lenient).unwrap();

    let strict = Cli {
        strict: true,
        ..lenient
    };
    let err = run(&strict).unwrap_err();
    assert!(format!("{err:#}").starts_with("reading schemas listed in"));
}

#[test]
fn invalid_schema_reports_cause() {
    let dir = temp_files(&[
        ("bad.yaml", "schemas:\n  - id: net\n    schema: {type: string}\n"),
        ("schemas.yaml", "schemas: [bad.yaml]"),
    ]);
    let cli = Cli {
        config: Some(dir.path().join("schemas.yaml")),
        ..Cli::default()
    };

    let err = run(&cli).unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "converting schemas: schema net should be an object"
    );
}

#[test]
fn no_schema_list_is_a_no_op() {
    run(&Cli::default()).unwrap();
}
