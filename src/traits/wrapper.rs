// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::traits::Handler;

/// Turns one handler into another, adding behavior around it.
///
/// A wrapper is a factory: [`Wrapper::wrap`] is called once per composition
/// and the handler it returns serves every request afterwards. Wrappers are
/// treated as stateless by the engine; any state they keep is their own.
pub trait Wrapper: Send + Sync {
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler>;

    /// Label used in logs and chain descriptions
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A [`Wrapper`] backed by a closure. Built with [`wrapper_fn`].
pub struct WrapperFn<F> {
    name: String,
    f: F,
}

/// Turn a closure over handlers into a [`Wrapper`].
///
/// ```
/// use std::sync::Arc;
/// use middlengine::traits::{wrapper_fn, Handler};
///
/// // A wrapper that adds nothing around its inner handler.
/// let passthrough = wrapper_fn("passthrough", |inner: Arc<dyn Handler>| inner);
/// ```
pub fn wrapper_fn<F>(name: impl Into<String>, f: F) -> WrapperFn<F>
where
    F: Fn(Arc<dyn Handler>) -> Arc<dyn Handler> + Send + Sync,
{
    WrapperFn {
        name: name.into(),
        f,
    }
}

impl<F> Wrapper for WrapperFn<F>
where
    F: Fn(Arc<dyn Handler>) -> Arc<dyn Handler> + Send + Sync,
{
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler> {
        (self.f)(inner)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
