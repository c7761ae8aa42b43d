//! Run configuration: what to read, how to mark it, and where to write.
//!
//! A config may be loaded from YAML and then extended from command-line
//! flags:
//!
//! ```yaml
//! files: [templates/]
//! recursive: true
//! file_marks:
//!   - "deploy.yml:path=k8s/deploy.yml"
//! filter_template_files: []
//! output: out/
//! values:
//!   name: demo
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Inputs, marks, and output target for one run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Files or directories to read, in order.
    pub files: Vec<PathBuf>,
    /// Walk directories in `files`.
    pub recursive: bool,
    /// `path:key=value` marks, applied in order.
    pub file_marks: Vec<String>,
    /// When non-empty, only these relative paths stay templates.
    pub filter_template_files: Vec<String>,
    /// Output directory; `None` prints to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Values exposed to templates as `values`.
    pub values: BTreeMap<String, serde_yaml::Value>,
}

impl RunConfig {
    /// Load a config from the YAML file at `path`.
    pub fn load_at(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Insert a `key=value` pair into `values` as a string.
    pub fn set_data_value(&mut self, pair: &str) -> Result<(), ConfigError> {
        let (key, value) = pair
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| ConfigError::MalformedDataValue {
                pair: pair.to_string(),
            })?;
        self.values
            .insert(key.to_string(), serde_yaml::Value::String(value.to_string()));
        Ok(())
    }
}
