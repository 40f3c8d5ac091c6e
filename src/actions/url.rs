//! URL synthesis from module name and method classification.
//!
//! # Responsibilities
//! - Base path: `/` for the index module, `/{module}/` otherwise
//! - Custom methods contribute a slug segment
//! - Single-resource methods gain an `{id}` placeholder
//!
//! # Design Decisions
//! - The custom and single-resource transforms compose, in that order
//! - Plain string operations; no regex

use crate::actions::classify::Classification;

/// Synthesize the URL for one classified method.
///
/// A bare custom method (`get`, `set`, `do` with no suffix) has an empty
/// slug, so the result contains a double slash. This matches the route
/// grammar applications already depend on and is pinned by tests; see
/// DESIGN.md.
pub fn synthesize(
    module_name: &str,
    method: &str,
    classification: &Classification,
    is_index: bool,
) -> String {
    let mut url = if is_index {
        String::from("/")
    } else {
        format!("/{}/", module_name)
    };
    if classification.custom {
        url.push_str(&custom_slug(method));
        url.push('/');
    }
    if classification.single_resource {
        url.push_str("{id}");
    }
    url
}

/// Slug for a custom method: strip the verb prefix and one following `_`,
/// hyphenate the rest, lowercase.
fn custom_slug(method: &str) -> String {
    let lowered = method.to_ascii_lowercase();
    let rest = ["get", "set", "do"]
        .iter()
        .find_map(|prefix| lowered.strip_prefix(prefix))
        .unwrap_or(lowered.as_str());
    let rest = rest.strip_prefix('_').unwrap_or(rest);
    rest.replace('_', "-")
}
