//! Application build sequence.
//!
//! # Responsibilities
//! - Wire the collaborators (source, registry, reporter) together
//! - Run the one-shot build: discover → load → bind → Ready
//! - Hand back the populated resource set and the built router
//!
//! # Design Decisions
//! - Builds are whole-cloth: a rebuild starts from Empty with a fresh
//!   resource set, never by mutating the previous one
//! - No error escapes a build; the caller always gets a (possibly empty)
//!   route set plus the reported diagnostics

use std::sync::Arc;

use axum::Router;

use crate::actions::discover::{discover, ActionSource, FsSource};
use crate::actions::registry::{load, ActionRegistry};
use crate::actions::resource::{ActionResource, ActionRoute};
use crate::config::schema::PerchConfig;
use crate::error::BoxError;
use crate::observability::{Reporter, TracingReporter};
use crate::routing::binder::bind;
use crate::routing::sink::{AxumSink, RouteSink};
use crate::actions::action::Action;

/// Route synthesizer: configuration, constructor registry, and the
/// collaborators the build sequence runs against.
pub struct Perch {
    config: PerchConfig,
    registry: ActionRegistry,
    source: Option<Box<dyn ActionSource>>,
    reporter: Arc<dyn Reporter>,
}

impl Perch {
    pub fn new(config: PerchConfig) -> Self {
        Self {
            config,
            registry: ActionRegistry::new(),
            source: None,
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Replace the filesystem source, e.g. with an in-memory listing.
    pub fn with_source(mut self, source: impl ActionSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Replace the tracing-backed reporter.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    pub fn config(&self) -> &PerchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PerchConfig) {
        self.config = config;
    }

    /// Register an infallible handler constructor for `module`.
    pub fn register<A, F>(&mut self, module: &str, constructor: F)
    where
        A: Action + 'static,
        F: Fn() -> A + Send + Sync + 'static,
    {
        self.registry.register(module, constructor);
    }

    /// Register a handler constructor that may fail.
    pub fn register_fallible<F>(&mut self, module: &str, constructor: F)
    where
        F: Fn() -> Result<Arc<dyn Action>, BoxError> + Send + Sync + 'static,
    {
        self.registry.register_fallible(module, constructor);
    }

    /// Run the core build sequence against a caller-supplied sink.
    ///
    /// Discovery, loading, and binding each isolate their failures per
    /// resource; the returned set reflects exactly what bound.
    pub fn build_into(&self, sink: &mut dyn RouteSink) -> Vec<ActionResource> {
        let reporter = self.reporter.as_ref();
        let mut resources = match &self.source {
            Some(source) => discover(source.as_ref(), reporter),
            None => discover(&FsSource::new(&self.config.actions_folder), reporter),
        };
        if resources.is_empty() {
            reporter.warn("You have no loaded actions. Check for files in the actions folder.");
        }
        load(&self.registry, &mut resources, reporter);
        bind(&mut resources, &self.config.actions_index, sink, reporter);
        resources
    }

    /// Run the build sequence and produce an `axum::Router`.
    pub fn build(&self) -> Build {
        let mut sink = AxumSink::new();
        let resources = self.build_into(&mut sink);
        let build = Build {
            resources,
            router: sink.into_router(),
        };
        if self.config.debug {
            build.log_routes(self.reporter.as_ref());
        }
        build
    }
}

impl std::fmt::Debug for Perch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Perch")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish()
    }
}

/// Result of one build: the populated resources and the built router.
///
/// Terminal for its build; a hot-reload style rebuild goes through
/// [`Perch::build`] again and produces a brand-new value.
pub struct Build {
    pub resources: Vec<ActionResource>,
    pub router: Router,
}

impl Build {
    /// All bound routes, flattened in resource order.
    pub fn routes(&self) -> Vec<&ActionRoute> {
        self.resources
            .iter()
            .flat_map(|resource| resource.routes.iter())
            .collect()
    }

    /// Apply a caller-supplied transform to the router, for routes that
    /// live outside the naming convention.
    pub fn extend<F>(mut self, transform: F) -> Self
    where
        F: FnOnce(Router) -> Router,
    {
        self.router = transform(self.router);
        self
    }

    pub fn into_router(self) -> Router {
        self.router
    }

    /// Report the route table in human-readable columns.
    pub fn log_routes(&self, reporter: &dyn Reporter) {
        let mut rows = Vec::new();
        for resource in &self.resources {
            for route in &resource.routes {
                rows.push((resource.file_name.as_str(), route));
            }
        }
        if rows.is_empty() {
            reporter.warn("No available routes!");
            return;
        }

        let url_width = rows.iter().map(|(_, r)| r.url.len()).max().unwrap_or(0);
        let file_width = rows.iter().map(|(f, _)| f.len()).max().unwrap_or(0);

        let mut lines = vec!["Available Routes:".to_string(), String::new()];
        for (file_name, route) in rows {
            lines.push(format!(
                "{:<6} -> {:<uw$} -> {:<fw$} -> {}",
                route.verb.to_string(),
                route.url,
                file_name,
                route.method,
                uw = url_width,
                fw = file_width,
            ));
        }
        reporter.info(&lines.join("\n"));
    }
}

impl std::fmt::Debug for Build {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Build")
            .field("resources", &self.resources)
            .finish()
    }
}
