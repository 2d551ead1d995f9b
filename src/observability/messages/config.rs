// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for chain configuration loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Chain configuration read from disk.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub name: &'a str,
    pub wrapper_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded chain '{}' from {} with {} wrappers",
            self.name, self.path, self.wrapper_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            name = self.name,
            wrapper_count = self.wrapper_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            chain = self.name,
            wrapper_count = self.wrapper_count,
        )
    }
}

/// The same wrapper appears more than once in a chain.
///
/// Legal, but usually a copy-paste slip, so it is surfaced.
///
/// # Log Level
/// `warn!` - Potential issue
///
/// # Example
/// ```
/// use middlengine::observability::messages::config::DuplicateWrapper;
///
/// let positions = vec![0, 2];
/// let msg = DuplicateWrapper {
///     id: "request_id",
///     positions: &positions,
/// };
///
/// assert_eq!(msg.to_string(), "Wrapper 'request_id' appears 2 times in the chain at positions [0, 2]");
/// ```
pub struct DuplicateWrapper<'a> {
    pub id: &'a str,
    pub positions: &'a [usize],
}

impl Display for DuplicateWrapper<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrapper '{}' appears {} times in the chain at positions {:?}",
            self.id,
            self.positions.len(),
            self.positions
        )
    }
}

impl StructuredLog for DuplicateWrapper<'_> {
    fn log(&self) {
        tracing::warn!(
            id = self.id,
            occurrences = self.positions.len(),
            positions = ?self.positions,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "duplicate_wrapper",
            span_name = name,
            id = self.id,
            occurrences = self.positions.len(),
        )
    }
}

/// A chain references a wrapper the registry does not hold.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownWrapper<'a> {
    pub id: &'a str,
    pub position: usize,
    pub available: &'a [&'a str],
}

impl Display for UnknownWrapper<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrapper '{}' at position {} is not registered (available: {})",
            self.id,
            self.position,
            self.available.join(", ")
        )
    }
}

impl StructuredLog for UnknownWrapper<'_> {
    fn log(&self) {
        tracing::error!(
            id = self.id,
            position = self.position,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unknown_wrapper",
            span_name = name,
            id = self.id,
            position = self.position,
        )
    }
}

/// Validation finished with errors.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ValidationFailed<'a> {
    pub name: &'a str,
    pub error_count: usize,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Chain '{}' failed validation with {} errors",
            self.name, self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            name = self.name,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation_failed",
            span_name = name,
            chain = self.name,
            error_count = self.error_count,
        )
    }
}
