// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it as a `tracing` event (or open a span) with
//! its fields attached.
//!
//! * `engine` - wrapper registration, chain composition, request dispatch
//! * `config` - chain configuration loading and validation
//!
//! # Usage Pattern
//!
//! ```rust
//! use middlengine::observability::messages::engine::ChainComposed;
//! use std::time::Duration;
//!
//! let names = vec!["request_id", "auth"];
//! let msg = ChainComposed {
//!     engine: "api",
//!     wrappers: &names,
//!     duration: Duration::from_micros(12),
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod config;
pub mod engine;

use tracing::Span;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event
    fn log(&self);

    /// Open a span carrying the message's fields
    fn span(&self, name: &str) -> Span;
}
