// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Values that flow through a handler chain.
//!
//! Handlers and wrappers exchange owned [`Request`] and [`Response`] values.
//! Both carry an ordered [`Headers`] list so that the order in which layers
//! set headers stays observable to callers and tests.

mod headers;
mod request;
mod response;

pub use headers::Headers;
pub use request::Request;
pub use response::Response;
