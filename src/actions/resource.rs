//! Action resource and route records.

use std::fmt;
use std::sync::Arc;

use axum::routing::MethodFilter;

use crate::actions::action::Action;

/// HTTP verb an action method is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Post => "post",
            Verb::Patch => "patch",
            Verb::Delete => "delete",
        }
    }

    /// Method filter for registration with an axum router.
    pub fn method_filter(&self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Delete => MethodFilter::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        };
        write!(f, "{}", upper)
    }
}

/// One synthesized route, owned by its parent [`ActionResource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRoute {
    /// Handler method identifier, e.g. `fetch_all`.
    pub method: String,
    pub verb: Verb,
    /// Path template; `{id}` is the only placeholder syntax.
    pub url: String,
}

/// One handler source unit, from file name to bound routes.
///
/// Created by discovery with only the derived names; the loader fills in
/// `handler`, the binder fills in `routes`. Rebuilt wholesale on every
/// build.
#[derive(Clone)]
pub struct ActionResource {
    /// Source identifier, e.g. `user_profile.rs`.
    pub file_name: String,
    /// Hyphenated slug, e.g. `user-profile`. Doubles as the URL base
    /// segment for non-index modules.
    pub module_name: String,
    /// PascalCase identifier, e.g. `UserProfile`.
    pub type_name: String,
    /// Singleton handler instance, set by the loader.
    pub handler: Option<Arc<dyn Action>>,
    /// Synthesized routes, set by the binder.
    pub routes: Vec<ActionRoute>,
}

impl ActionResource {
    pub fn new(file_name: &str) -> Self {
        let module_name = module_name_of(file_name);
        let type_name = type_name_of(&module_name);
        Self {
            file_name: file_name.to_string(),
            module_name,
            type_name,
            handler: None,
            routes: Vec::new(),
        }
    }

    /// Whether the loader resolved and constructed this resource's handler.
    pub fn is_loaded(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for ActionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionResource")
            .field("file_name", &self.file_name)
            .field("module_name", &self.module_name)
            .field("type_name", &self.type_name)
            .field("loaded", &self.is_loaded())
            .field("routes", &self.routes)
            .finish()
    }
}

/// Derive the module slug from a file name: strip the `.rs` extension,
/// underscores become hyphens.
pub fn module_name_of(file_name: &str) -> String {
    file_name
        .strip_suffix(".rs")
        .unwrap_or(file_name)
        .replace('_', "-")
}

/// Derive the type name from a module slug: PascalCase over the hyphen
/// segments.
pub fn type_name_of(module_name: &str) -> String {
    module_name
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}
