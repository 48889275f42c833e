//! Configuration for pathgraph
//!
//! Configuration is read from a TOML file passed with `--config`. Every
//! section is optional and falls back to its defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::{OutputConfig, PathgraphConfig, SearchConfig, TieBreak};

impl PathgraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
