//! Route binding: classification + synthesis over loaded resources.

use std::collections::HashMap;

use crate::actions::action::{ActionMethod, MethodHandler};
use crate::actions::classify::classify;
use crate::actions::resource::{ActionResource, ActionRoute, Verb};
use crate::actions::url::synthesize;
use crate::error::ActionError;
use crate::observability::Reporter;
use crate::routing::sink::{BoundRoute, RouteSink};

/// Synthesize routes for one resource's method table.
///
/// Routes are grouped by verb in GET, POST, PATCH, DELETE order, stable in
/// table order within each group. Names with no verb bucket are dropped.
pub fn make_routes(module_name: &str, is_index: bool, methods: &[ActionMethod]) -> Vec<ActionRoute> {
    let mut routes = Vec::new();
    for verb in [Verb::Get, Verb::Post, Verb::Patch, Verb::Delete] {
        for method in methods {
            let Some(classification) = classify(method.name()) else {
                continue;
            };
            if classification.verb != verb {
                continue;
            }
            routes.push(ActionRoute {
                method: method.name().to_string(),
                verb,
                url: synthesize(module_name, method.name(), &classification, is_index),
            });
        }
    }
    routes
}

/// Bind every loaded resource's routes to the sink.
///
/// Resources without a handler are skipped (the loader already reported
/// them). A resource yielding zero routes is a warning, not fatal. A sink
/// failure is reported once for the resource and its remaining
/// registrations are abandoned; sibling resources still bind.
pub fn bind(
    resources: &mut [ActionResource],
    index_module: &str,
    sink: &mut dyn RouteSink,
    reporter: &dyn Reporter,
) {
    for resource in resources.iter_mut() {
        let Some(handler) = resource.handler.clone() else {
            continue;
        };
        let methods = handler.methods();
        let is_index = resource.module_name == index_module;
        let routes = make_routes(&resource.module_name, is_index, &methods);
        if routes.is_empty() {
            reporter.warn(&format!(
                "No methods found for `{}` action.",
                resource.module_name
            ));
            continue;
        }
        resource.routes = routes;

        let table: HashMap<&str, MethodHandler> =
            methods.iter().map(|m| (m.name(), m.handler())).collect();
        for route in &resource.routes {
            let Some(method_handler) = table.get(route.method.as_str()) else {
                continue;
            };
            let bound = BoundRoute {
                verb: route.verb,
                url: route.url.clone(),
                method: route.method.clone(),
                handler: method_handler.clone(),
            };
            if let Err(err) = sink.register(&bound) {
                let err = ActionError::Binding {
                    module: resource.module_name.clone(),
                    reason: err.to_string(),
                };
                reporter.error(&err.to_string());
                break;
            }
        }
    }
}
