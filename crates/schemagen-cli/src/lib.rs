//! schemagen Command Line
//!
//! Loads the generator settings, reads the listed schema files, runs the
//! converter and writes the generated Go files.
//!
//! # Example
//!
//! ```text
//! schemagen --config schemas.yaml --output gen/pet --raw-suffix raw
//! ```

#![warn(missing_docs)]

pub mod cli;

// Re-exports
pub use cli::Cli;

use anyhow::{Context, Result};
use schemagen_emit::{generate, write_files};
use schemagen_schema::{convert, read_all};
use std::io;
use tracing::info;

/// Run one generation
///
/// Without a schema list nothing is generated.
///
/// # Errors
/// Any failure loading settings or schemas, converting, or writing
pub fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings()?;
    let Some(list) = settings.config.as_deref() else {
        info!("no schema list given, nothing to generate");
        return Ok(());
    };

    let schemas = read_all(list, None, settings.skip_policy)
        .with_context(|| format!("reading schemas listed in {}", list.display()))?;
    let collected = convert(&[], &schemas).context("converting schemas")?;
    let files = generate(&collected, &settings).files(&settings);

    if cli.dry_run {
        info!(objects = ?collected.all().names(), "dry run, collected objects");
        for file in &files {
            info!(file = file.name, package = %file.package, "dry run, would write");
        }
        return Ok(());
    }

    let written = write_files(&files, &settings.output, &mut io::stdout().lock())
        .context("writing generated files")?;
    info!(files = written.len(), "done");
    Ok(())
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
