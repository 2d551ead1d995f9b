// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod handler;
#[cfg(test)]
pub mod stub;
pub mod wrapper;

pub use handler::{handler_fn, Handler, HandlerFn};
pub use wrapper::{wrapper_fn, Wrapper, WrapperFn};
