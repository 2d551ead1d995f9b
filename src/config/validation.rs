// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Checks a [`ChainConfig`] against the wrappers a host actually provides.
//!
//! Validation collects every problem instead of stopping at the first one,
//! so a broken configuration can be fixed in a single pass:
//!
//! 1. **Empty ids**: blank entries in the wrapper list
//! 2. **Unknown ids**: entries the [`WrapperRegistry`] does not contain
//!
//! Repeated ids are legal (a wrapper may wrap the chain more than once) but
//! are logged as a warning.

use std::collections::BTreeMap;

use crate::config::{ChainConfig, WrapperRegistry};
use crate::errors::ValidationError;
use crate::observability::messages::{config::*, StructuredLog};

/// Validate every wrapper reference in `cfg`
pub fn validate_chain(
    cfg: &ChainConfig,
    registry: &WrapperRegistry,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let available = registry.ids();

    for (position, id) in cfg.wrappers.iter().enumerate() {
        if id.trim().is_empty() {
            errors.push(ValidationError::EmptyWrapperId { position });
        } else if !registry.contains_key(id) {
            UnknownWrapper {
                id,
                position,
                available: &available,
            }
            .log();
            errors.push(ValidationError::UnknownWrapper {
                position,
                id: id.clone(),
            });
        }
    }

    warn_on_duplicates(cfg);

    if errors.is_empty() {
        return Ok(());
    }

    ValidationFailed {
        name: &cfg.name,
        error_count: errors.len(),
    }
    .log();
    Err(errors)
}

fn warn_on_duplicates(cfg: &ChainConfig) {
    let mut positions: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (position, id) in cfg.wrappers.iter().enumerate() {
        if !id.trim().is_empty() {
            positions.entry(id.as_str()).or_default().push(position);
        }
    }

    for (id, positions) in positions.iter().filter(|(_, p)| p.len() > 1) {
        DuplicateWrapper { id, positions }.log();
    }
}
