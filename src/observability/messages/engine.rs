// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for engine lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Engine construction
//! * Wrapper registration (accepted and rejected)
//! * Chain composition (success and failure)
//! * Request dispatch

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Engine constructed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct EngineCreated<'a> {
    pub engine: &'a str,
    pub base_handler: Option<&'a str>,
}

impl Display for EngineCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.base_handler {
            Some(handler) => write!(f, "Engine '{}' created with base handler '{}'", self.engine, handler),
            None => write!(f, "Engine '{}' created without a base handler", self.engine),
        }
    }
}

impl StructuredLog for EngineCreated<'_> {
    fn log(&self) {
        tracing::info!(
            engine = self.engine,
            base_handler = self.base_handler,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "engine_created",
            span_name = name,
            engine = self.engine,
            base_handler = self.base_handler,
        )
    }
}

/// Wrapper appended to an engine's chain.
///
/// # Log Level
/// `debug!` - Configuration detail
///
/// # Example
/// ```
/// use middlengine::observability::messages::engine::WrapperRegistered;
///
/// let msg = WrapperRegistered {
///     engine: "api",
///     wrapper: "auth",
///     position: 1,
/// };
///
/// assert_eq!(msg.to_string(), "Engine 'api' registered wrapper 'auth' at position 1");
/// ```
pub struct WrapperRegistered<'a> {
    pub engine: &'a str,
    pub wrapper: &'a str,
    pub position: usize,
}

impl Display for WrapperRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' registered wrapper '{}' at position {}",
            self.engine, self.wrapper, self.position
        )
    }
}

impl StructuredLog for WrapperRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            wrapper = self.wrapper,
            position = self.position,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "wrapper_registered",
            span_name = name,
            engine = self.engine,
            wrapper = self.wrapper,
            position = self.position,
        )
    }
}

/// Change to a frozen engine refused.
///
/// # Log Level
/// `warn!` - Caller misuse that was contained
pub struct RegistrationRejected<'a> {
    pub engine: &'a str,
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RegistrationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Engine '{}' rejected {}: {}",
            self.engine, self.operation, self.error
        )
    }
}

impl StructuredLog for RegistrationRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            engine = self.engine,
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "registration_rejected",
            span_name = name,
            engine = self.engine,
            operation = self.operation,
            error = %self.error,
        )
    }
}

/// Chain composed; the engine is frozen.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ChainComposed<'a> {
    pub engine: &'a str,
    /// Wrapper names, outermost first
    pub wrappers: &'a [&'a str],
    pub duration: std::time::Duration,
}

impl Display for ChainComposed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.wrappers.is_empty() {
            return write!(
                f,
                "Engine '{}' composed with no wrappers in {:?}",
                self.engine, self.duration
            );
        }
        write!(
            f,
            "Engine '{}' composed {} wrappers [{}] in {:?}",
            self.engine,
            self.wrappers.len(),
            self.wrappers.join(" -> "),
            self.duration
        )
    }
}

impl StructuredLog for ChainComposed<'_> {
    fn log(&self) {
        tracing::info!(
            engine = self.engine,
            wrapper_count = self.wrappers.len(),
            chain = %self.wrappers.join(" -> "),
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "chain_composed",
            span_name = name,
            engine = self.engine,
            wrapper_count = self.wrappers.len(),
            duration = ?self.duration,
        )
    }
}

/// Composition or dispatch hit a configuration fault.
///
/// # Log Level
/// `error!` - Fatal, logged right before the engine panics
pub struct CompositionFailed<'a> {
    pub engine: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for CompositionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Engine '{}' is misconfigured: {}", self.engine, self.error)
    }
}

impl StructuredLog for CompositionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            engine = self.engine,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "composition_failed",
            span_name = name,
            engine = self.engine,
            error = %self.error,
        )
    }
}

/// Request forwarded to the engine's dispatch target.
///
/// # Log Level
/// `debug!` - Per-request detail
pub struct RequestDispatched<'a> {
    pub engine: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub composed: bool,
}

impl Display for RequestDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let target = if self.composed { "composed chain" } else { "base handler" };
        write!(
            f,
            "Engine '{}' dispatching {} {} to {}",
            self.engine, self.method, self.path, target
        )
    }
}

impl StructuredLog for RequestDispatched<'_> {
    fn log(&self) {
        tracing::debug!(
            engine = self.engine,
            method = self.method,
            path = self.path,
            composed = self.composed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "dispatch",
            span_name = name,
            engine = self.engine,
            method = self.method,
            path = self.path,
            composed = self.composed,
        )
    }
}
