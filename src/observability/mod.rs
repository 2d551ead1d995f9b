// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic line the crate emits is a small message struct with a
//! `Display` implementation, so wording lives in one place instead of being
//! scattered as string literals through the engine and config code.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - wrapper registration, composition and dispatch
//! * `messages::config` - chain configuration loading and validation
//!
//! # Usage
//!
//! ```rust
//! use middlengine::observability::messages::engine::WrapperRegistered;
//! use middlengine::observability::messages::StructuredLog;
//!
//! WrapperRegistered {
//!     engine: "api",
//!     wrapper: "request_id",
//!     position: 0,
//! }
//! .log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, or by `default_filter`
/// when the variable is unset or invalid.
///
/// Returns `false` when a global subscriber was already installed, which
/// makes it safe to call from every test.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init()
        .is_ok()
}
