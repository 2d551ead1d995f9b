// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::traits::Wrapper;

/// Named wrappers a chain configuration can refer to.
///
/// The host fills the registry with its own wrapper implementations;
/// configurations then pick and order them by id.
#[derive(Clone, Default)]
pub struct WrapperRegistry(pub HashMap<String, Arc<dyn Wrapper>>);

impl WrapperRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register `wrapper` under `id`, replacing any previous entry
    pub fn insert<W: Wrapper + 'static>(&mut self, id: impl Into<String>, wrapper: W) {
        self.insert_shared(id, Arc::new(wrapper));
    }

    pub fn insert_shared(&mut self, id: impl Into<String>, wrapper: Arc<dyn Wrapper>) {
        self.0.insert(id.into(), wrapper);
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Wrapper>> {
        self.0.get(id)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Registered ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.0.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for WrapperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrapperRegistry")
            .field("wrapper_count", &self.0.len())
            .field("wrapper_ids", &self.ids())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Wrapper>>> for WrapperRegistry {
    fn from(map: HashMap<String, Arc<dyn Wrapper>>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::stub::HeaderWrapper;

    #[test]
    fn insert_and_lookup() {
        let mut registry = WrapperRegistry::new();
        registry.insert("auth", HeaderWrapper::new("X-Auth", "ok"));
        registry.insert("request_id", HeaderWrapper::new("X-Request-Id", "1"));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains_key("auth"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.ids(), vec!["auth", "request_id"]);
    }

    #[test]
    fn insert_replaces_existing_id() {
        let mut registry = WrapperRegistry::new();
        registry.insert("auth", HeaderWrapper::new("X-Old", "1"));
        registry.insert("auth", HeaderWrapper::new("X-New", "2"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("auth").map(|w| w.name()), Some("X-New"));
    }

    #[test]
    fn debug_lists_ids_only() {
        let mut registry = WrapperRegistry::new();
        registry.insert("auth", HeaderWrapper::new("X-Auth", "ok"));

        let debug = format!("{:?}", registry);
        assert!(debug.contains("wrapper_count: 1"));
        assert!(debug.contains("auth"));
    }
}
