// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod chain;
pub mod runtime;

pub use chain::fold_wrappers;
pub use runtime::{Engine, EngineState, DEFAULT_ENGINE_NAME};
