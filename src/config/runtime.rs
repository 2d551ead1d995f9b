// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::sync::Arc;

use crate::config::{load_and_validate_config, validate_chain, ChainConfig, WrapperRegistry};
use crate::engine::Engine;
use crate::errors::{ConfigError, ValidationError};
use crate::traits::Handler;

/// Builds an [`Engine`] from a chain configuration and a wrapper registry.
///
/// The returned engine has every configured wrapper registered in order but
/// is not composed yet, so the host can still add wrappers of its own before
/// calling [`Engine::compose`].
///
/// # Examples
/// ```
/// use middlengine::config::{ChainBuilder, ChainConfig, WrapperRegistry};
/// use middlengine::message::Response;
/// use middlengine::traits::{handler_fn, wrapper_fn, Handler};
/// use std::sync::Arc;
///
/// let mut registry = WrapperRegistry::new();
/// registry.insert("noop", wrapper_fn("noop", |inner: Arc<dyn Handler>| inner));
///
/// let cfg = ChainConfig::from_yaml("name: api\nwrappers: [noop, noop]").unwrap();
/// let base = Arc::new(handler_fn("ok", |_req| async { Response::ok("OK") }));
///
/// let mut engine = ChainBuilder::from_config(&cfg, &registry, base).unwrap();
/// engine.compose();
/// assert_eq!(engine.wrapper_names(), vec!["noop", "noop"]);
/// ```
pub struct ChainBuilder;

impl ChainBuilder {
    /// Validate `cfg` against `registry` and register its wrappers, outermost
    /// first, on a new engine named after the chain.
    pub fn from_config(
        cfg: &ChainConfig,
        registry: &WrapperRegistry,
        base: Arc<dyn Handler>,
    ) -> Result<Engine, ConfigError> {
        validate_chain(cfg, registry)?;

        let mut engine = Engine::named_shared(cfg.name.clone(), base);
        for (position, id) in cfg.wrappers.iter().enumerate() {
            let wrapper = registry.get(id).ok_or_else(|| {
                ConfigError::Validation(vec![ValidationError::UnknownWrapper {
                    position,
                    id: id.clone(),
                }])
            })?;
            engine.register_shared(Arc::clone(wrapper))?;
        }

        Ok(engine)
    }

    /// Load, validate and build in one step
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        registry: &WrapperRegistry,
        base: Arc<dyn Handler>,
    ) -> Result<Engine, ConfigError> {
        let cfg = load_and_validate_config(path, registry)?;
        Self::from_config(&cfg, registry, base)
    }
}
