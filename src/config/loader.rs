// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::{validate_chain, WrapperRegistry};
use crate::engine::DEFAULT_ENGINE_NAME;
use crate::errors::ConfigError;
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};

/// Declarative description of a handler chain.
///
/// Wrappers are listed outermost first and refer to entries of a
/// [`WrapperRegistry`] by id. The same id may appear more than once.
///
/// # Example
/// ```yaml
/// name: public_api
/// wrappers:
///   - request_id
///   - auth
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub wrappers: Vec<String>,
}

fn default_name() -> String {
    DEFAULT_ENGINE_NAME.to_string()
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            wrappers: Vec::new(),
        }
    }
}

impl ChainConfig {
    /// Parse a chain configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Load a chain configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ChainConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let cfg = ChainConfig::from_yaml(&content)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        name: &cfg.name,
        wrapper_count: cfg.wrappers.len(),
    }
    .log();

    Ok(cfg)
}

/// Load a chain configuration and check every wrapper id against `registry`
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
    registry: &WrapperRegistry,
) -> Result<ChainConfig, ConfigError> {
    let cfg = load_config(path)?;
    validate_chain(&cfg, registry)?;
    Ok(cfg)
}
