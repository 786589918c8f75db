//! Schema file reader
//!
//! A schema file is a YAML document with a top-level `schemas` list of
//! schema maps. A config file lists schema file paths under `schemas`
//! instead; [`read_all`] loads every listed file.

use crate::error::ReaderError;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Path prefix of schema files built into the host framework
const EMBED_PREFIX: &str = "embed";

/// What [`read_all`] does with a listed file that fails to load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipPolicy {
    /// Log and omit the file
    #[default]
    Skip,
    /// Abort on the first failure
    Fail,
}

fn read_document(path: &Path) -> Result<Vec<Value>, ReaderError> {
    let content = fs::read_to_string(path).map_err(|source| ReaderError::io_error(path, source))?;
    let document: Value = serde_yaml::from_str(&content).map_err(|source| ReaderError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    match document.get("schemas") {
        Some(Value::Sequence(entries)) => Ok(entries.clone()),
        _ => Err(ReaderError::NoSchemas {
            path: path.to_path_buf(),
        }),
    }
}

/// Read the schema maps of one file
///
/// # Errors
/// I/O and YAML failures, a missing `schemas` list, or a list entry that is
/// not a map
pub fn read_single(path: impl AsRef<Path>) -> Result<Vec<Mapping>, ReaderError> {
    let path = path.as_ref();
    let schemas = read_document(path)?
        .into_iter()
        .map(|entry| match entry {
            Value::Mapping(map) => Ok(map),
            _ => Err(ReaderError::BadSchema {
                path: path.to_path_buf(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(path = %path.display(), schemas = schemas.len(), "read schema file");
    Ok(schemas)
}

/// Read the schema maps of every file listed in `config`
///
/// Entries starting with `embed` are ignored, as is an entry naming the same
/// file as `restricted`. Relative entries resolve against the directory of
/// `config`. Files that fail to load are handled per `policy`.
///
/// # Errors
/// Failures reading `config` itself, a non-string entry, or under
/// [`SkipPolicy::Fail`] the first listed file that fails to load
pub fn read_all(
    config: impl AsRef<Path>,
    restricted: Option<&Path>,
    policy: SkipPolicy,
) -> Result<Vec<Mapping>, ReaderError> {
    let config = config.as_ref();
    let base = config.parent().unwrap_or_else(|| Path::new(""));
    let restricted = restricted.and_then(|path| fs::canonicalize(path).ok());

    let mut result = Vec::new();
    for entry in read_document(config)? {
        let Value::String(name) = entry else {
            return Err(ReaderError::BadSchemaPath {
                path: config.to_path_buf(),
            });
        };
        if name.starts_with(EMBED_PREFIX) {
            continue;
        }
        let path = base.join(&name);
        if is_same_file(restricted.as_deref(), &path) {
            continue;
        }
        match read_single(&path) {
            Ok(schemas) => result.extend(schemas),
            Err(err) if policy == SkipPolicy::Skip => {
                warn!(path = %path.display(), error = %err, "skipping schema file");
            }
            Err(err) => return Err(err),
        }
    }
    Ok(result)
}

fn is_same_file(restricted: Option<&Path>, path: &Path) -> bool {
    let Some(restricted) = restricted else {
        return false;
    };
    fs::canonicalize(path).map_or(false, |path| path == restricted)
}
