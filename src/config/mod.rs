// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;
mod runtime;
mod validation;

#[cfg(test)]
mod integration_tests;

pub use loader::{load_and_validate_config, load_config, ChainConfig};
pub use registry::WrapperRegistry;
pub use runtime::ChainBuilder;
pub use validation::validate_chain;
