//! Action handler contract.
//!
//! An action exposes its routable methods as an explicit table built at
//! registration time. The table replaces runtime reflection: each entry
//! pairs a method name with an invocable reference closed over the action's
//! singleton instance, so the binder can classify and register methods
//! without introspecting the type.

use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

/// Boxed async handler for one action method, closed over its instance.
pub type MethodHandler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// One entry of an action's method table.
#[derive(Clone)]
pub struct ActionMethod {
    name: &'static str,
    handler: MethodHandler,
}

impl ActionMethod {
    /// Build a table entry from a method name and an async closure.
    ///
    /// The closure typically clones the action's `Arc` and awaits the
    /// corresponding method; any `IntoResponse` return type works.
    pub fn new<F, Fut, R>(name: &'static str, call: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + 'static,
    {
        Self {
            name,
            handler: Arc::new(move |request| {
                let fut = call(request);
                Box::pin(async move { fut.await.into_response() })
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn handler(&self) -> MethodHandler {
        self.handler.clone()
    }
}

impl std::fmt::Debug for ActionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionMethod")
            .field("name", &self.name)
            .finish()
    }
}

/// A handler resource exposing routable methods.
///
/// Instances are built once per build by the [`ActionRegistry`] and shared
/// behind an `Arc`; bound methods may then be invoked concurrently by the
/// dispatcher, which is why implementors must be `Send + Sync`.
///
/// [`ActionRegistry`]: crate::actions::registry::ActionRegistry
///
/// ```
/// use std::sync::Arc;
/// use perch::{Action, ActionMethod};
///
/// #[derive(Default)]
/// struct Widgets;
///
/// impl Widgets {
///     async fn fetch_all(&self) -> &'static str {
///         "all widgets"
///     }
/// }
///
/// impl Action for Widgets {
///     fn methods(self: Arc<Self>) -> Vec<ActionMethod> {
///         vec![ActionMethod::new("fetch_all", {
///             let this = self.clone();
///             move |_request| {
///                 let this = this.clone();
///                 async move { this.fetch_all().await }
///             }
///         })]
///     }
/// }
/// ```
pub trait Action: Send + Sync {
    /// The method table: every routable method, in declaration order.
    fn methods(self: Arc<Self>) -> Vec<ActionMethod>;
}

impl std::fmt::Debug for dyn Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Action")
    }
}
