//! Command line arguments

use anyhow::{Context, Result};
use clap::Parser;
use schemagen_schema::{GeneratorConfig, SkipPolicy};
use std::path::PathBuf;

/// Generate typed Go accessors from resource schemas
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "schemagen", version, about, long_about = None)]
pub struct Cli {
    /// YAML file with generator settings; flags override its values
    #[arg(long, value_name = "FILE")]
    pub generator_config: Option<PathBuf>,

    /// File listing the schema files to generate
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prefix of generated file names; empty prints to stdout
    #[arg(long, value_name = "PREFIX")]
    pub output: Option<String>,

    /// Package of the goext runtime
    #[arg(long, value_name = "PACKAGE")]
    pub goext_package: Option<String>,

    /// Package receiving CRUD wrappers and schema ids
    #[arg(long, value_name = "PACKAGE")]
    pub goodies_package: Option<String>,

    /// Package receiving structs, accessors and constructors
    #[arg(long, value_name = "PACKAGE")]
    pub resource_package: Option<String>,

    /// Package receiving interfaces
    #[arg(long, value_name = "PACKAGE")]
    pub interface_package: Option<String>,

    /// Suffix of raw type names
    #[arg(long, value_name = "SUFFIX")]
    pub raw_suffix: Option<String>,

    /// Suffix of raw interface names, appended to the raw suffix
    #[arg(long, value_name = "SUFFIX")]
    pub interface_suffix: Option<String>,

    /// Fail on listed schema files that cannot be loaded
    #[arg(long)]
    pub strict: bool,

    /// Log what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Effective settings: the generator config file, then flags
    ///
    /// # Errors
    /// The generator config file cannot be loaded
    pub fn settings(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.generator_config {
            Some(path) => GeneratorConfig::from_file(path)
                .with_context(|| format!("loading generator config {}", path.display()))?,
            None => GeneratorConfig::new(),
        };

        if let Some(path) = &self.config {
            config = config.with_config(path);
        }
        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        if let Some(package) = &self.goext_package {
            config = config.with_goext_package(package);
        }
        if let Some(package) = &self.goodies_package {
            config = config.with_goodies_package(package);
        }
        if let Some(package) = &self.resource_package {
            config = config.with_resource_package(package);
        }
        if let Some(package) = &self.interface_package {
            config = config.with_interface_package(package);
        }
        if let Some(suffix) = &self.raw_suffix {
            config = config.with_raw_suffix(suffix);
        }
        if let Some(suffix) = &self.interface_suffix {
            config = config.with_interface_suffix(suffix);
        }
        if self.strict {
            config = config.with_skip_policy(SkipPolicy::Fail);
        }
        Ok(config)
    }

    /// Default log filter directive
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "schemagen=debug"
        } else {
            "schemagen=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemagen_test_utils::temp_files;

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "schemagen",
            "--config",
            "schemas.yaml",
            "--output",
            "gen",
            "--raw-suffix",
            "",
            "--strict",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("schemas.yaml")));
        assert_eq!(cli.output.as_deref(), Some("gen"));
        assert_eq!(cli.raw_suffix.as_deref(), Some(""));
        assert!(cli.strict);
        assert!(cli.verbose);
        assert!(!cli.dry_run);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["schemagen", "--ouptut", "gen"]).is_err());
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["schemagen"]).unwrap();
        assert_eq!(cli.settings().unwrap(), GeneratorConfig::new());
        assert_eq!(cli.log_directive(), "schemagen=info");
    }

    #[test]
    fn flags_override_file() {
        let dir = temp_files(&[(
            "gen.yaml",
            "output: from_file\nresource_package: model\nraw_suffix: base\n",
        )]);
        let cli = Cli {
            generator_config: Some(dir.path().join("gen.yaml")),
            output: Some("from_flag".to_string()),
            strict: true,
            ..Cli::default()
        };

        let settings = cli.settings().unwrap();
        assert_eq!(settings.output, "from_flag");
        assert_eq!(settings.resource_package, "model");
        assert_eq!(settings.raw_suffix, "base");
        assert_eq!(settings.skip_policy, SkipPolicy::Fail);
    }

    #[test]
    fn missing_generator_config() {
        let cli = Cli {
            generator_config: Some(PathBuf::from("/nonexistent/gen.yaml")),
            ..Cli::default()
        };
        let err = cli.settings().unwrap_err();
        assert!(format!("{err:#}").starts_with("loading generator config /nonexistent/gen.yaml"));
    }
}
