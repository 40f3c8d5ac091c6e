//! Action loading through an explicit constructor registry.
//!
//! # Responsibilities
//! - Map module names to handler constructors
//! - Resolve and instantiate one singleton per discovered resource
//!
//! # Design Decisions
//! - The registry is built once at startup by the embedding application;
//!   "file name implies route" survives without string-based dynamic lookup
//! - Constructors are fallible; a failure is indistinguishable in effect
//!   from a missing registration (that resource contributes no routes)
//! - Per-resource isolation: a resolution failure is reported and siblings
//!   still load

use std::collections::HashMap;
use std::sync::Arc;

use crate::actions::action::Action;
use crate::actions::resource::ActionResource;
use crate::error::{ActionError, BoxError};
use crate::observability::Reporter;

type Constructor = Box<dyn Fn() -> Result<Arc<dyn Action>, BoxError> + Send + Sync>;

/// Registry of handler constructors, keyed by module name.
#[derive(Default)]
pub struct ActionRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an infallible constructor for `module`.
    pub fn register<A, F>(&mut self, module: &str, constructor: F)
    where
        A: Action + 'static,
        F: Fn() -> A + Send + Sync + 'static,
    {
        self.register_fallible(module, move || Ok(Arc::new(constructor()) as Arc<dyn Action>));
    }

    /// Register a constructor that may fail.
    pub fn register_fallible<F>(&mut self, module: &str, constructor: F)
    where
        F: Fn() -> Result<Arc<dyn Action>, BoxError> + Send + Sync + 'static,
    {
        self.constructors.insert(module.to_string(), Box::new(constructor));
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// Resolve and construct the handler for one resource.
    pub fn resolve(&self, resource: &ActionResource) -> Result<Arc<dyn Action>, ActionError> {
        let resolution = |reason: String| ActionError::Resolution {
            module: resource.module_name.clone(),
            type_name: resource.type_name.clone(),
            reason,
        };
        let constructor = self
            .constructors
            .get(&resource.module_name)
            .ok_or_else(|| resolution("no constructor registered".to_string()))?;
        constructor().map_err(|err| resolution(err.to_string()))
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut modules: Vec<_> = self.constructors.keys().collect();
        modules.sort();
        f.debug_struct("ActionRegistry")
            .field("modules", &modules)
            .finish()
    }
}

/// Instantiate every discovered resource's handler. Failures are reported
/// per resource; siblings keep loading.
pub fn load(registry: &ActionRegistry, resources: &mut [ActionResource], reporter: &dyn Reporter) {
    for resource in resources.iter_mut() {
        match registry.resolve(resource) {
            Ok(handler) => resource.handler = Some(handler),
            Err(err) => reporter.error(&err.to_string()),
        }
    }
}
