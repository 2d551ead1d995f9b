// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::engine::chain::fold_wrappers;
use crate::errors::EngineError;
use crate::message::{Request, Response};
use crate::observability::messages::{engine::*, StructuredLog};
use crate::traits::{Handler, Wrapper};

/// Name used in logs when the caller does not pick one
pub const DEFAULT_ENGINE_NAME: &str = "engine";

/// Where an [`Engine`] is in its build-then-freeze lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No base handler yet; composing or dispatching is a fault
    Unconfigured,
    /// Base handler set, wrappers may still be registered
    Assembling,
    /// Chain folded; the engine no longer accepts changes
    Composed,
}

/// Holds a base handler and an ordered list of wrappers, and folds them into
/// a single handler on [`compose`](Engine::compose).
///
/// Wrappers are registered outermost first. Until the engine is composed,
/// dispatch goes straight to the base handler; afterwards it goes through the
/// full chain. Configuration methods take `&mut self` and dispatch takes
/// `&self`, so once the engine is shared behind an `Arc` it is frozen.
///
/// The engine is itself a [`Handler`] and can be wrapped or nested like any
/// other.
///
/// ```
/// use middlengine::engine::Engine;
/// use middlengine::message::{Request, Response};
/// use middlengine::traits::{handler_fn, wrapper_fn, Handler};
/// use std::sync::Arc;
///
/// let mut engine = Engine::named("api", handler_fn("ok", |_req| async { Response::ok("OK") }));
/// engine
///     .register(wrapper_fn("passthrough", |inner: Arc<dyn Handler>| inner))
///     .unwrap();
/// engine.compose();
///
/// assert!(engine.is_composed());
/// assert_eq!(engine.wrapper_names(), vec!["passthrough"]);
/// ```
pub struct Engine {
    name: String,
    base: Option<Arc<dyn Handler>>,
    wrappers: Vec<Arc<dyn Wrapper>>,
    composed: Option<Arc<dyn Handler>>,
}

impl Engine {
    /// Create an engine around `handler`
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self::from_shared(Arc::new(handler))
    }

    /// Create an engine around a handler that is already shared
    pub fn from_shared(handler: Arc<dyn Handler>) -> Self {
        Self::build(DEFAULT_ENGINE_NAME.to_string(), Some(handler))
    }

    /// Create an engine with a log label
    pub fn named<H: Handler + 'static>(name: impl Into<String>, handler: H) -> Self {
        Self::named_shared(name, Arc::new(handler))
    }

    pub fn named_shared(name: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        Self::build(name.into(), Some(handler))
    }

    /// Create an engine with no base handler; one must be set with
    /// [`set_handler`](Engine::set_handler) before composing.
    pub fn unconfigured() -> Self {
        Self::build(DEFAULT_ENGINE_NAME.to_string(), None)
    }

    fn build(name: String, base: Option<Arc<dyn Handler>>) -> Self {
        EngineCreated {
            engine: &name,
            base_handler: base.as_ref().map(|h| h.name()),
        }
        .log();

        Self {
            name,
            base,
            wrappers: Vec::new(),
            composed: None,
        }
    }

    /// Set or replace the base handler
    pub fn set_handler<H: Handler + 'static>(&mut self, handler: H) -> Result<(), EngineError> {
        self.set_shared_handler(Arc::new(handler))
    }

    pub fn set_shared_handler(&mut self, handler: Arc<dyn Handler>) -> Result<(), EngineError> {
        self.ensure_open("set_handler")?;
        self.base = Some(handler);
        Ok(())
    }

    /// Append a wrapper; it becomes the innermost layer registered so far.
    ///
    /// Duplicates are allowed. Fails with [`EngineError::AlreadyComposed`]
    /// once the engine is composed, leaving the chain untouched.
    pub fn register<W: Wrapper + 'static>(&mut self, wrapper: W) -> Result<(), EngineError> {
        self.register_shared(Arc::new(wrapper))
    }

    pub fn register_shared(&mut self, wrapper: Arc<dyn Wrapper>) -> Result<(), EngineError> {
        self.ensure_open("register")?;

        WrapperRegistered {
            engine: &self.name,
            wrapper: wrapper.name(),
            position: self.wrappers.len(),
        }
        .log();

        self.wrappers.push(wrapper);
        Ok(())
    }

    /// Fold the registered wrappers around the base handler, or report why
    /// that is not possible. No dispatch target changes on error.
    pub fn try_compose(&mut self) -> Result<(), EngineError> {
        self.ensure_open("compose")?;
        let base = self.base.as_ref().ok_or(EngineError::MissingBaseHandler)?;

        let start = Instant::now();
        let chain = fold_wrappers(Arc::clone(base), &self.wrappers);

        ChainComposed {
            engine: &self.name,
            wrappers: &self.wrapper_names(),
            duration: start.elapsed(),
        }
        .log();

        self.composed = Some(chain);
        Ok(())
    }

    /// Fold the registered wrappers around the base handler.
    ///
    /// # Panics
    ///
    /// Panics when no base handler is set or the engine is already composed.
    /// Both are programming errors; the panic is not meant to be caught.
    pub fn compose(&mut self) {
        if let Err(err) = self.try_compose() {
            self.fail(err);
        }
    }

    /// Send one request through the current dispatch target.
    ///
    /// # Panics
    ///
    /// Panics when no base handler is set.
    pub async fn dispatch(&self, req: Request) -> Response {
        Handler::handle(self, req).await
    }

    pub fn state(&self) -> EngineState {
        match (&self.base, &self.composed) {
            (_, Some(_)) => EngineState::Composed,
            (Some(_), None) => EngineState::Assembling,
            (None, None) => EngineState::Unconfigured,
        }
    }

    pub fn is_composed(&self) -> bool {
        self.composed.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered wrapper names, outermost first
    pub fn wrapper_names(&self) -> Vec<&str> {
        self.wrappers.iter().map(|w| w.name()).collect()
    }

    /// Number of registered wrappers
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    fn ensure_open(&self, operation: &str) -> Result<(), EngineError> {
        if self.composed.is_none() {
            return Ok(());
        }
        let err = EngineError::AlreadyComposed;
        RegistrationRejected {
            engine: &self.name,
            operation,
            error: &err,
        }
        .log();
        Err(err)
    }

    fn target(&self) -> Result<&Arc<dyn Handler>, EngineError> {
        self.composed
            .as_ref()
            .or(self.base.as_ref())
            .ok_or(EngineError::MissingBaseHandler)
    }

    fn fail(&self, err: EngineError) -> ! {
        CompositionFailed {
            engine: &self.name,
            error: &err,
        }
        .log();
        panic!("engine '{}': {}", self.name, err);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::unconfigured()
    }
}

#[async_trait]
impl Handler for Engine {
    async fn handle(&self, req: Request) -> Response {
        let target = match self.target() {
            Ok(target) => target,
            Err(err) => self.fail(err),
        };

        RequestDispatched {
            engine: &self.name,
            method: &req.method,
            path: &req.path,
            composed: self.composed.is_some(),
        }
        .log();

        target.handle(req).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("name", &self.name)
            .field("state", &self.state())
            .field("wrappers", &self.wrapper_names())
            .finish()
    }
}
