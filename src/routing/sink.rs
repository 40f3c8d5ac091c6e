//! Route registration sinks.

use std::collections::HashSet;

use axum::extract::Request;
use axum::routing::on;
use axum::Router;

use crate::actions::action::MethodHandler;
use crate::actions::resource::Verb;
use crate::error::BoxError;

/// One fully populated route, ready for registration.
#[derive(Clone)]
pub struct BoundRoute {
    pub verb: Verb,
    /// Path template; `{id}` is the only placeholder syntax.
    pub url: String,
    /// Handler method identifier, for diagnostics.
    pub method: String,
    pub handler: MethodHandler,
}

impl std::fmt::Debug for BoundRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundRoute")
            .field("verb", &self.verb)
            .field("url", &self.url)
            .field("method", &self.method)
            .finish()
    }
}

/// Capability accepting synthesized routes from the binder.
pub trait RouteSink {
    fn register(&mut self, route: &BoundRoute) -> Result<(), BoxError>;
}

/// Default sink building an `axum::Router`.
///
/// Registrations axum would reject by panicking (empty path segments,
/// duplicate verb/path pairs) are returned as errors instead, so the
/// binder can downgrade them to per-resource reports.
#[derive(Default)]
pub struct AxumSink {
    router: Router,
    registered: HashSet<(Verb, String)>,
}

impl AxumSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand over the built router.
    pub fn into_router(self) -> Router {
        self.router
    }
}

impl RouteSink for AxumSink {
    fn register(&mut self, route: &BoundRoute) -> Result<(), BoxError> {
        if route.url.contains("//") {
            return Err(format!("route `{}` contains an empty path segment", route.url).into());
        }
        let key = (route.verb, route.url.clone());
        if !self.registered.insert(key) {
            return Err(format!(
                "route `{} {}` is already registered",
                route.verb, route.url
            )
            .into());
        }

        let handler = route.handler.clone();
        let service = move |request: Request| {
            let handler = handler.clone();
            async move { handler(request).await }
        };
        let router = std::mem::take(&mut self.router);
        self.router = router.route(&route.url, on(route.verb.method_filter(), service));
        Ok(())
    }
}
