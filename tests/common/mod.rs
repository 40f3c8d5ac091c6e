//! Shared fixtures for integration testing.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request};
use axum::RequestExt;
use perch::{
    Action, ActionError, ActionMethod, ActionSource, BoundRoute, Reporter, RouteSink, Verb,
};

/// In-memory action source with a fixed listing.
pub struct ListSource(pub Vec<&'static str>);

impl ActionSource for ListSource {
    fn list(&self) -> Result<Vec<String>, ActionError> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }
}

/// Reporter that collects everything it is handed.
#[derive(Clone, Default)]
pub struct CollectingReporter {
    pub infos: Arc<Mutex<Vec<String>>>,
    pub warnings: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl CollectingReporter {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Reporter for CollectingReporter {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Sink that records registrations, optionally failing URLs by prefix.
#[derive(Default)]
pub struct RecordingSink {
    pub routes: Vec<(Verb, String, String)>,
    pub fail_prefix: Option<&'static str>,
}

impl RouteSink for RecordingSink {
    fn register(&mut self, route: &BoundRoute) -> Result<(), perch::BoxError> {
        if let Some(prefix) = self.fail_prefix {
            if route.url.starts_with(prefix) {
                return Err(format!("injected failure for `{}`", route.url).into());
            }
        }
        self.routes
            .push((route.verb, route.url.clone(), route.method.clone()));
        Ok(())
    }
}

/// Index action: one collection route on `/`.
#[derive(Default)]
pub struct IndexAction;

impl IndexAction {
    async fn fetch_all(&self) -> &'static str {
        "Index -> fetch_all"
    }
}

impl Action for IndexAction {
    fn methods(self: Arc<Self>) -> Vec<ActionMethod> {
        vec![entry_0(self.clone(), "fetch_all", |this, _request| async move {
            this.fetch_all().await
        })]
    }
}

/// Full CRUD action plus a custom method, mirroring a typical resource.
#[derive(Default)]
pub struct WidgetsAction;

impl WidgetsAction {
    async fn fetch_all(&self) -> &'static str {
        "Widgets -> fetch_all"
    }

    async fn fetch_single(&self, id: String) -> String {
        format!("Widgets -> fetch_single({id})")
    }

    async fn create(&self) -> &'static str {
        "Widgets -> create"
    }

    async fn update(&self, id: String) -> String {
        format!("Widgets -> update({id})")
    }

    async fn delete(&self, id: String) -> String {
        format!("Widgets -> delete({id})")
    }

    async fn get_stats(&self) -> &'static str {
        "Widgets -> get_stats"
    }
}

impl Action for WidgetsAction {
    fn methods(self: Arc<Self>) -> Vec<ActionMethod> {
        vec![
            entry_0(self.clone(), "fetch_all", |this, _request| async move {
                this.fetch_all().await
            }),
            entry_id(self.clone(), "fetch_single", |this, id| async move {
                this.fetch_single(id).await
            }),
            entry_0(self.clone(), "create", |this, _request| async move {
                this.create().await
            }),
            entry_id(self.clone(), "update", |this, id| async move {
                this.update(id).await
            }),
            entry_id(self.clone(), "delete", |this, id| async move {
                this.delete(id).await
            }),
            entry_0(self.clone(), "get_stats", |this, _request| async move {
                this.get_stats().await
            }),
        ]
    }
}

/// Action whose methods all miss the naming conventions.
#[derive(Default)]
pub struct QuietAction;

impl Action for QuietAction {
    fn methods(self: Arc<Self>) -> Vec<ActionMethod> {
        vec![ActionMethod::new("helper", |_request| async { "unroutable" })]
    }
}

/// Table entry for a method ignoring the request.
fn entry_0<A, F, Fut, R>(this: Arc<A>, name: &'static str, call: F) -> ActionMethod
where
    A: Action + 'static,
    F: Fn(Arc<A>, Request) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = R> + Send + 'static,
    R: axum::response::IntoResponse + 'static,
{
    ActionMethod::new(name, move |request| call(this.clone(), request))
}

/// Table entry for a single-resource method, extracting the `{id}` param.
fn entry_id<A, F, Fut, R>(this: Arc<A>, name: &'static str, call: F) -> ActionMethod
where
    A: Action + 'static,
    F: Fn(Arc<A>, String) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = R> + Send + 'static,
    R: axum::response::IntoResponse + 'static,
{
    let call = Arc::new(call);
    ActionMethod::new(name, move |mut request: Request| {
        let this = this.clone();
        let call = call.clone();
        async move {
            let Path(id) = request
                .extract_parts::<Path<String>>()
                .await
                .expect("route template carries an {id} segment");
            call(this, id).await
        }
    })
}
