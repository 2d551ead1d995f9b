// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::errors::EngineError;

/// Problems found when checking a chain configuration against a wrapper registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A wrapper entry is blank
    #[error("wrapper at position {position} has an empty id")]
    EmptyWrapperId { position: usize },

    /// A wrapper entry names something the registry does not know
    #[error("wrapper '{id}' at position {position} is not registered")]
    UnknownWrapper { position: usize, id: String },
}

/// Errors raised while loading a chain configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read chain configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse chain configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("chain configuration validation failed:\n{}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("failed to assemble configured chain: {0}")]
    Engine(#[from] EngineError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<Vec<ValidationError>> for ConfigError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ConfigError::Validation(errors)
    }
}
