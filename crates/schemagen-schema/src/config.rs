//! Generator configuration

use crate::error::ReaderError;
use crate::reader::SkipPolicy;
use schemagen_ir::add_name;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings of one generator run
///
/// Loadable from YAML; every key is optional and falls back to the
/// defaults of [`GeneratorConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// File listing the schema files to generate
    pub config: Option<PathBuf>,
    /// Prefix of generated file names; empty prints to stdout
    pub output: String,
    /// Package of the goext runtime
    pub goext_package: String,
    /// Package receiving CRUD wrappers
    pub goodies_package: String,
    /// Package receiving structs, implementations and constructors
    pub resource_package: String,
    /// Package receiving interfaces
    pub interface_package: String,
    /// Suffix of raw types
    pub raw_suffix: String,
    /// Suffix of mutable interfaces, joined to `raw_suffix`
    pub interface_suffix: String,
    /// Handling of listed schema files that fail to load
    pub skip_policy: SkipPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            config: None,
            output: String::new(),
            goext_package: "goext".to_string(),
            goodies_package: "goodies".to_string(),
            resource_package: "resources".to_string(),
            interface_package: "esi".to_string(),
            raw_suffix: "raw".to_string(),
            interface_suffix: "interface".to_string(),
            skip_policy: SkipPolicy::Skip,
        }
    }
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a YAML file
    ///
    /// # Errors
    /// [`ReaderError::Io`] or [`ReaderError::Config`]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReaderError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|source| ReaderError::io_error(path, source))?;
        serde_yaml::from_str(&content).map_err(|source| ReaderError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// With schema list file
    #[must_use]
    pub fn with_config(mut self, config: impl Into<PathBuf>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// With output prefix
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// With goext package
    #[must_use]
    pub fn with_goext_package(mut self, package: impl Into<String>) -> Self {
        self.goext_package = package.into();
        self
    }

    /// With goodies package
    #[must_use]
    pub fn with_goodies_package(mut self, package: impl Into<String>) -> Self {
        self.goodies_package = package.into();
        self
    }

    /// With resource package
    #[must_use]
    pub fn with_resource_package(mut self, package: impl Into<String>) -> Self {
        self.resource_package = package.into();
        self
    }

    /// With interface package
    #[must_use]
    pub fn with_interface_package(mut self, package: impl Into<String>) -> Self {
        self.interface_package = package.into();
        self
    }

    /// With raw suffix
    #[must_use]
    pub fn with_raw_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.raw_suffix = suffix.into();
        self
    }

    /// With interface suffix
    #[must_use]
    pub fn with_interface_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.interface_suffix = suffix.into();
        self
    }

    /// With skip policy
    #[must_use]
    pub fn with_skip_policy(mut self, policy: SkipPolicy) -> Self {
        self.skip_policy = policy;
        self
    }

    /// Suffix actually appended to mutable interface names
    #[must_use]
    pub fn effective_interface_suffix(&self) -> String {
        add_name(&self.raw_suffix, &self.interface_suffix)
    }
}
