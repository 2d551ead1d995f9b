// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::future::Future;

use crate::message::{Request, Response};

/// Processes one request and produces one response.
///
/// Base handlers terminate a chain; wrapped handlers hold an inner
/// `Arc<dyn Handler>` and delegate to it before and/or after their own work.
/// Implementations are shared across concurrent dispatches, so any per-call
/// state has to live in the request or behind the handler's own locks.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, req: Request) -> Response;

    /// Label used in logs and chain descriptions
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A [`Handler`] backed by an async closure. Built with [`handler_fn`].
pub struct HandlerFn<F> {
    name: String,
    f: F,
}

/// Turn an async closure into a [`Handler`].
///
/// ```
/// use middlengine::message::Response;
/// use middlengine::traits::handler_fn;
///
/// let hello = handler_fn("hello", |_req| async { Response::ok("hello") });
/// ```
pub fn handler_fn<F, Fut>(name: impl Into<String>, f: F) -> HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    HandlerFn {
        name: name.into(),
        f,
    }
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    async fn handle(&self, req: Request) -> Response {
        (self.f)(req).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
