// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Faults in the engine's build-then-freeze protocol.

use thiserror::Error;

/// Misuse of an [`Engine`](crate::engine::Engine) during configuration.
///
/// These are programmer errors. The fallible methods surface them so a host
/// can report them, while `Engine::compose` treats them as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Composition or dispatch was attempted before a base handler was set
    #[error("base handler is not set: provide a handler before composing or dispatching")]
    MissingBaseHandler,

    /// The chain is frozen; it cannot be composed again or changed
    #[error("handler chain is already composed and can no longer be modified")]
    AlreadyComposed,
}
