// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::sync::Arc;

use crate::config::{load_and_validate_config, ChainBuilder, ChainConfig, WrapperRegistry};
use crate::engine::EngineState;
use crate::errors::{ConfigError, ValidationError};
use crate::message::Request;
use crate::traits::stub::{event_log, events, HeaderWrapper, MarkerWrapper, StaticHandler};

/// Tests that drive engines built from YAML chain configurations
#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn chain_from_file_runs_in_config_order() {
        let log = event_log();
        let mut registry = WrapperRegistry::new();
        registry.insert("request_id", MarkerWrapper::new("request_id", &log));
        registry.insert("auth", MarkerWrapper::new("auth", &log));

        let file = write_config("name: public_api\nwrappers:\n  - auth\n  - request_id\n");
        let mut engine =
            ChainBuilder::from_file(file.path(), &registry, Arc::new(StaticHandler::ok("OK")))
                .unwrap();

        assert_eq!(engine.name(), "public_api");
        assert_eq!(engine.state(), EngineState::Assembling);
        engine.compose();

        let resp = engine.dispatch(Request::get("/")).await;
        assert_eq!(resp.body_text(), "OK");
        assert_eq!(
            events(&log),
            vec!["auth:before", "request_id:before", "request_id:after", "auth:after"]
        );
    }

    #[tokio::test]
    async fn repeated_ids_wrap_more_than_once() {
        let mut registry = WrapperRegistry::new();
        registry.insert("via", HeaderWrapper::new("Via", "proxy"));

        let cfg = ChainConfig::from_yaml("wrappers: [via, via]").unwrap();
        let mut engine =
            ChainBuilder::from_config(&cfg, &registry, Arc::new(StaticHandler::ok("OK"))).unwrap();
        engine.compose();

        let resp = engine.dispatch(Request::get("/")).await;
        assert_eq!(resp.headers.get_all("via").count(), 2);
    }

    #[test]
    fn host_can_extend_configured_chain_before_compose() {
        let mut registry = WrapperRegistry::new();
        registry.insert("auth", HeaderWrapper::new("X-Auth", "ok"));

        let cfg = ChainConfig::from_yaml("wrappers: [auth]").unwrap();
        let mut engine =
            ChainBuilder::from_config(&cfg, &registry, Arc::new(StaticHandler::ok("OK"))).unwrap();
        engine.register(HeaderWrapper::new("X-Extra", "1")).unwrap();
        engine.compose();

        assert_eq!(engine.wrapper_names(), vec!["X-Auth", "X-Extra"]);
    }

    #[test]
    fn unknown_wrapper_fails_build() {
        let registry = WrapperRegistry::new();
        let cfg = ChainConfig::from_yaml("wrappers: [gzip]").unwrap();

        let result = ChainBuilder::from_config(&cfg, &registry, Arc::new(StaticHandler::ok("OK")));

        match result {
            Err(ConfigError::Validation(errors)) => assert_eq!(
                errors,
                vec![ValidationError::UnknownWrapper {
                    position: 0,
                    id: "gzip".to_string()
                }]
            ),
            other => panic!("expected validation error, got {:?}", other.map(|e| e.state())),
        }
    }

    #[test]
    fn load_and_validate_reports_all_errors() {
        let mut registry = WrapperRegistry::new();
        registry.insert("auth", HeaderWrapper::new("X-Auth", "ok"));
        let file = write_config("wrappers: [auth, '', gzip]\n");

        let err = load_and_validate_config(file.path(), &registry).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("wrapper at position 1 has an empty id"));
        assert!(message.contains("wrapper 'gzip' at position 2 is not registered"));
    }
}
