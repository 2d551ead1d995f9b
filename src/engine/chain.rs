// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::traits::{Handler, Wrapper};

/// Fold `wrappers` around `base`, first wrapper outermost.
///
/// Walks the slice from the last entry to the first, so the last wrapper
/// sits directly on `base` and the first one sees every request before
/// anything else does (and every response last). An empty slice returns
/// `base` itself.
pub fn fold_wrappers(base: Arc<dyn Handler>, wrappers: &[Arc<dyn Wrapper>]) -> Arc<dyn Handler> {
    wrappers
        .iter()
        .rev()
        .fold(base, |inner, wrapper| wrapper.wrap(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Request;
    use crate::traits::stub::{event_log, events, HeaderWrapper, MarkerWrapper, StaticHandler};

    #[test]
    fn empty_fold_is_identity() {
        let base: Arc<dyn Handler> = Arc::new(StaticHandler::ok("OK"));
        let folded = fold_wrappers(Arc::clone(&base), &[]);
        assert!(Arc::ptr_eq(&base, &folded));
    }

    #[tokio::test]
    async fn first_wrapper_is_outermost() {
        let log = event_log();
        let wrappers: Vec<Arc<dyn Wrapper>> = vec![
            Arc::new(MarkerWrapper::new("a", &log)),
            Arc::new(MarkerWrapper::new("b", &log)),
            Arc::new(MarkerWrapper::new("c", &log)),
        ];

        let chain = fold_wrappers(Arc::new(StaticHandler::ok("OK")), &wrappers);
        chain.handle(Request::get("/")).await;

        assert_eq!(
            events(&log),
            vec!["a:before", "b:before", "c:before", "c:after", "b:after", "a:after"]
        );
    }

    #[tokio::test]
    async fn fold_matches_manual_nesting() {
        let a = HeaderWrapper::new("X-Layer", "a");
        let b = HeaderWrapper::new("X-Layer", "b");

        let manual = a.wrap(b.wrap(Arc::new(StaticHandler::ok("OK"))));
        let wrappers: Vec<Arc<dyn Wrapper>> = vec![Arc::new(a), Arc::new(b)];
        let folded = fold_wrappers(Arc::new(StaticHandler::ok("OK")), &wrappers);

        let expected = manual.handle(Request::get("/")).await;
        let actual = folded.handle(Request::get("/")).await;
        assert_eq!(actual, expected);
        // Inner layer touches the response first.
        assert_eq!(actual.headers.get_all("x-layer").collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
