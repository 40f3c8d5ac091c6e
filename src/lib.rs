//! Convention-over-configuration route synthesizer for axum.
//!
//! Drop handler files in an actions folder, register their constructors,
//! and the build sequence infers HTTP verbs and URL patterns from method
//! naming conventions alone:
//!
//! ```text
//! actions folder
//!     → discovery   (file names → module + type names)
//!     → loading     (constructor registry → handler singletons)
//!     → binding     (method names → verb + URL → axum::Router)
//! ```
//!
//! Naming conventions, per method:
//! - `fetch_all` → GET collection, `fetch_single` → GET `{id}`
//! - `create` → POST, `update` → PATCH `{id}`, `delete` → DELETE `{id}`
//! - `get_*` / `set_*` / `do_*` → custom slug routes (`do_*` also `{id}`)
//! - anything else is not routed
//!
//! ```no_run
//! use std::sync::Arc;
//! use perch::{Action, ActionMethod, Perch, PerchConfig};
//!
//! #[derive(Default)]
//! struct Index;
//!
//! impl Index {
//!     async fn fetch_all(&self) -> &'static str {
//!         "hello"
//!     }
//! }
//!
//! impl Action for Index {
//!     fn methods(self: Arc<Self>) -> Vec<ActionMethod> {
//!         vec![ActionMethod::new("fetch_all", {
//!             let this = self.clone();
//!             move |_request| {
//!                 let this = this.clone();
//!                 async move { this.fetch_all().await }
//!             }
//!         })]
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut app = Perch::new(PerchConfig::default());
//!     app.register("index", Index::default);
//!     let router = app.build().into_router();
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

// Core subsystems
pub mod actions;
pub mod app;
pub mod config;
pub mod error;

// Cross-cutting concerns
pub mod observability;
pub mod routing;

pub use actions::action::{Action, ActionMethod, MethodHandler};
pub use actions::discover::{ActionSource, FsSource};
pub use actions::registry::ActionRegistry;
pub use actions::resource::{ActionResource, ActionRoute, Verb};
pub use app::{Build, Perch};
pub use config::loader::{load_config, ConfigError};
pub use config::schema::PerchConfig;
pub use error::{ActionError, BoxError};
pub use observability::reporter::{Reporter, TracingReporter};
pub use routing::sink::{AxumSink, BoundRoute, RouteSink};
