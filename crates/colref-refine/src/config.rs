use std::fs;
use std::path::Path;

use colref_core::errors::{ColrefError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a refinement run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineConfig {
    /// Optional cap on propagation rounds. `None` runs until the order is stable.
    #[serde(default)]
    pub max_rounds: Option<usize>,
    /// Worker threads for the propagation step; `1` stays on the calling thread.
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Keep per-round diagnostics in the report.
    #[serde(default = "default_record_rounds")]
    pub record_rounds: bool,
}

fn default_threads() -> usize {
    1
}

fn default_record_rounds() -> bool {
    true
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            max_rounds: None,
            threads: default_threads(),
            record_rounds: default_record_rounds(),
        }
    }
}

impl RefineConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ColrefError> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|err| ColrefError::Config(ErrorInfo::new("config-yaml", err.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML file.
    pub fn load(path: &Path) -> Result<Self, ColrefError> {
        let yaml = fs::read_to_string(path).map_err(|err| {
            ColrefError::Io(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&yaml).map_err(|err| err.with_context("path", path.display()))
    }

    /// Rejects settings that cannot drive a run.
    pub fn validate(&self) -> Result<(), ColrefError> {
        if self.threads == 0 {
            return Err(ColrefError::Config(
                ErrorInfo::new("config-threads", "threads must be at least 1")
                    .with_hint("use `threads: 1` for a sequential run"),
            ));
        }
        Ok(())
    }
}
