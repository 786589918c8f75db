//! Testing utilities for schemagen workspace
//!
//! YAML fixtures and schema file helpers shared by the crate test suites.

#![allow(missing_docs)]

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Base schema with a name and an id
pub const BASE_SCHEMA: &str = "
id: base
schema:
  type: object
  properties:
    id: {type: string}
    name: {type: string, default: unnamed}
";

/// Schema extending [`BASE_SCHEMA`] with a parent back-reference
pub const PET_SCHEMA: &str = "
id: pet
parent: owner
extends: [base]
schema:
  type: object
  required: [name]
  properties:
    age: {type: [integer, 'null']}
    toys:
      type: array
      items:
        type: object
        properties:
          color: {type: string}
";

/// Schema every other fixture schema may reference
pub const OWNER_SCHEMA: &str = "
id: owner
schema:
  type: object
  properties:
    id: {type: string}
    address:
      type: object
      properties:
        street: {type: string}
        number: {type: integer, default: 1}
";

pub fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

pub fn mapping(text: &str) -> Mapping {
    serde_yaml::from_str(text).unwrap()
}

pub fn schemas(texts: &[&str]) -> Vec<Mapping> {
    texts.iter().map(|text| mapping(text)).collect()
}

/// Wrap schema definitions in a `schemas:` document
pub fn schema_document(texts: &[&str]) -> String {
    let list = Value::Sequence(texts.iter().map(|text| yaml(text)).collect());
    let mut document = Mapping::new();
    document.insert(Value::String("schemas".to_string()), list);
    serde_yaml::to_string(&document).unwrap()
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Temporary directory holding `files` as `(name, content)` pairs
pub fn temp_files(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        write_file(dir.path(), name, content);
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_schemas() {
        let document = mapping(&schema_document(&[BASE_SCHEMA, OWNER_SCHEMA]));
        let list = document.get("schemas").unwrap().as_sequence().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].get("id").unwrap().as_str(), Some("base"));
    }
}
