// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test handlers and wrappers shared by the unit and integration tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::message::{Request, Response};
use crate::traits::{Handler, Wrapper};

/// Returns a clone of a fixed response and counts how often it was called
pub struct StaticHandler {
    pub response: Response,
    pub calls: AtomicUsize,
}

impl StaticHandler {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(Response::ok(body))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Handler for StaticHandler {
    async fn handle(&self, _req: Request) -> Response {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// Answers `200` with the request path as body and the request headers copied over
pub struct EchoHandler;

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, req: Request) -> Response {
        let mut resp = Response::ok(req.path.clone());
        resp.headers = req.headers;
        resp
    }

    fn name(&self) -> &str {
        "echo"
    }
}

/// Always panics, standing in for a faulty base handler
pub struct PanickingHandler;

#[async_trait]
impl Handler for PanickingHandler {
    async fn handle(&self, _req: Request) -> Response {
        panic!("handler fault");
    }

    fn name(&self) -> &str {
        "panicking"
    }
}

/// Appends a header to every response produced by the inner handler
pub struct HeaderWrapper {
    pub header: String,
    pub value: String,
}

impl HeaderWrapper {
    pub fn new(header: &str, value: &str) -> Self {
        Self {
            header: header.to_string(),
            value: value.to_string(),
        }
    }
}

impl Wrapper for HeaderWrapper {
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(HeaderHandler {
            inner,
            header: self.header.clone(),
            value: self.value.clone(),
        })
    }

    fn name(&self) -> &str {
        &self.header
    }
}

struct HeaderHandler {
    inner: Arc<dyn Handler>,
    header: String,
    value: String,
}

#[async_trait]
impl Handler for HeaderHandler {
    async fn handle(&self, req: Request) -> Response {
        let mut resp = self.inner.handle(req).await;
        resp.headers.append(self.header.clone(), self.value.clone());
        resp
    }
}

/// Shared event log written by [`MarkerWrapper`] layers
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Records `<label>:before` on the way in and `<label>:after` on the way out
pub struct MarkerWrapper {
    pub label: String,
    pub log: EventLog,
}

impl MarkerWrapper {
    pub fn new(label: &str, log: &EventLog) -> Self {
        Self {
            label: label.to_string(),
            log: Arc::clone(log),
        }
    }
}

impl Wrapper for MarkerWrapper {
    fn wrap(&self, inner: Arc<dyn Handler>) -> Arc<dyn Handler> {
        Arc::new(MarkerHandler {
            inner,
            label: self.label.clone(),
            log: Arc::clone(&self.log),
        })
    }

    fn name(&self) -> &str {
        &self.label
    }
}

struct MarkerHandler {
    inner: Arc<dyn Handler>,
    label: String,
    log: EventLog,
}

#[async_trait]
impl Handler for MarkerHandler {
    async fn handle(&self, req: Request) -> Response {
        self.log.lock().unwrap().push(format!("{}:before", self.label));
        let resp = self.inner.handle(req).await;
        self.log.lock().unwrap().push(format!("{}:after", self.label));
        resp
    }
}
