// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // chain config + wrapper registry
pub mod engine;        // chain composition and dispatch
pub mod errors;        // error handling
pub mod message;       // request/response values
pub mod observability;
pub mod traits;        // Handler and Wrapper abstractions

pub use engine::{Engine, EngineState};
pub use message::{Request, Response};
pub use traits::{Handler, Wrapper};
