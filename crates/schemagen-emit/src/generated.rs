//! Generated sources
//!
//! [`generate`] renders every collected object into chunks grouped by
//! destination file; [`Generated::files`] assembles the chunks into Go
//! source files and [`write_files`] puts them on disk.

use crate::crud::{render_fetch, render_list, CrudParams};
use crate::error::EmitError;
use crate::item::ObjectNames;
use crate::names::{const_block, render_schema_name};
use crate::object::{
    render_constructor, render_implementation, render_interface, render_mutable_interface,
    render_struct,
};
use schemagen_ir::try_add_name;
use schemagen_schema::{Collected, GeneratorConfig};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Rendered chunks, one list per destination file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    /// Interfaces listing the accessors of each object
    pub raw_interfaces: Vec<String>,
    /// Interfaces embedding the raw ones, open for extension
    pub interfaces: Vec<String>,
    /// Struct definitions
    pub structs: Vec<String>,
    /// Accessor methods
    pub implementations: Vec<String>,
    /// `Make<Type>` constructors
    pub constructors: Vec<String>,
    /// CRUD wrappers returning interfaces
    pub crud: Vec<String>,
    /// CRUD wrappers returning raw structs
    pub raw_crud: Vec<String>,
    /// Schema id constant declarations
    pub names: Vec<String>,
}

/// One Go source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File name without the output prefix
    pub name: &'static str,
    /// Package clause
    pub package: String,
    /// Complete file content
    pub content: String,
}

impl GeneratedFile {
    /// Path under `output`; an empty prefix means the output stream
    #[must_use]
    pub fn path(&self, output: &str) -> Option<PathBuf> {
        let path = try_add_name(output, self.name);
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}

/// Render every collected object
///
/// All non-empty objects get their types, accessors and constructors.
/// Top-level objects get a schema id constant, and the non-empty ones get
/// CRUD wrappers.
#[must_use]
pub fn generate(collected: &Collected, config: &GeneratorConfig) -> Generated {
    let raw_suffix = config.raw_suffix.as_str();
    let interface_suffix = config.effective_interface_suffix();
    let runtime = config.goext_package.as_str();
    let mut generated = Generated::default();

    for object in collected.top_level() {
        generated.names.push(render_schema_name(object, runtime));
        if object.is_empty() {
            continue;
        }

        let names = ObjectNames::of(object);
        let name = names.name(raw_suffix);
        for raw in [false, true] {
            let type_name = if raw {
                format!("*{}.{}", config.resource_package, names.name(raw_suffix))
            } else {
                format!("{}.{}", config.interface_package, names.interface_type(raw_suffix))
            };
            let target = if raw {
                &mut generated.raw_crud
            } else {
                &mut generated.crud
            };
            for lock in [false, true] {
                for params in CrudParams::fetches(raw, lock) {
                    target.push(render_fetch(runtime, &name, &type_name, params));
                }
                let params = CrudParams {
                    raw,
                    lock,
                    filter: false,
                };
                target.push(render_list(runtime, &name, &type_name, params));
            }
        }
    }

    for object in collected.all().iter().filter(|object| !object.is_empty()) {
        generated
            .raw_interfaces
            .push(render_interface(object, &interface_suffix));
        generated
            .interfaces
            .push(render_mutable_interface(object, &interface_suffix, raw_suffix));
        generated.structs.push(render_struct(object, raw_suffix));
        generated
            .implementations
            .push(render_implementation(object, &interface_suffix, raw_suffix));
        generated
            .constructors
            .push(render_constructor(object, raw_suffix));
    }

    info!(
        objects = generated.structs.len(),
        wrappers = generated.crud.len() + generated.raw_crud.len(),
        names = generated.names.len(),
        "generated sources"
    );
    generated
}

/// `package <name>` followed by the non-empty chunks
///
/// Returns an empty string when every chunk is empty.
#[must_use]
pub fn collect_data(package: &str, chunks: &[String]) -> String {
    let chunks: Vec<&str> = chunks
        .iter()
        .map(String::as_str)
        .filter(|chunk| !chunk.is_empty())
        .collect();
    if chunks.is_empty() {
        return String::new();
    }
    format!("package {package}\n\n{}", chunks.join("\n"))
}

impl Generated {
    /// Assembled files in writing order, empty ones left out
    #[must_use]
    pub fn files(&self, config: &GeneratorConfig) -> Vec<GeneratedFile> {
        let names = [const_block(&self.names)];
        let layout: [(&'static str, &str, &[String]); 8] = [
            ("generated_interface.go", &config.interface_package, &self.raw_interfaces),
            ("interface.go", &config.interface_package, &self.interfaces),
            ("raw.go", &config.resource_package, &self.structs),
            ("implementation.go", &config.resource_package, &self.implementations),
            ("constructors.go", &config.resource_package, &self.constructors),
            ("crud.go", &config.goodies_package, &self.crud),
            ("raw_crud.go", &config.goodies_package, &self.raw_crud),
            ("names.go", &config.goodies_package, &names),
        ];

        layout
            .into_iter()
            .filter_map(|(name, package, chunks)| {
                let content = collect_data(package, chunks);
                (!content.is_empty()).then(|| GeneratedFile {
                    name,
                    package: package.to_string(),
                    content,
                })
            })
            .collect()
    }
}

/// Write `files` under the `output` prefix
///
/// With an empty prefix the files are written one after another to
/// `stream`. Returns the paths written.
///
/// # Errors
/// [`EmitError::Io`] when a file cannot be written, [`EmitError::Stream`]
/// when `stream` fails
pub fn write_files<W: Write>(
    files: &[GeneratedFile],
    output: &str,
    stream: &mut W,
) -> Result<Vec<PathBuf>, EmitError> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        match file.path(output) {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .map_err(|source| EmitError::io_error(parent, source))?;
                }
                fs::write(&path, &file.content)
                    .map_err(|source| EmitError::io_error(&path, source))?;
                debug!(path = %path.display(), package = %file.package, "wrote file");
                written.push(path);
            }
            None => {
                stream
                    .write_all(file.content.as_bytes())
                    .map_err(|source| EmitError::Stream {
                        file: file.name.to_string(),
                        source,
                    })?;
            }
        }
    }
    Ok(written)
}
