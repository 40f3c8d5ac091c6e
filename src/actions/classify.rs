//! Method name classification.
//!
//! # Responsibilities
//! - Map a method name to its verb bucket (GET/POST/PATCH/DELETE)
//! - Flag custom methods (`get`/`set`/`do` + suffix)
//! - Flag single-resource methods (operate on one identified item)
//!
//! # Design Decisions
//! - One pure predicate per axis; the three axes are independent
//! - The four verb patterns are mutually exclusive by construction
//! - No regex: plain prefix checks keep the semantics inspectable
//! - A name with no verb bucket is not an error, it is simply not routed

use crate::actions::resource::Verb;

/// Classification of a single method name.
///
/// `custom` and `single_resource` are independent axes; a name such as
/// `do_foo` carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verb: Verb,
    pub custom: bool,
    pub single_resource: bool,
}

/// True if `rest` is made of word characters only (may be empty).
fn is_word(rest: &str) -> bool {
    rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// True if `name` is `prefix` followed by zero or more word characters.
fn verb_prefixed(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix).map(is_word).unwrap_or(false)
}

pub fn is_get(name: &str) -> bool {
    name == "fetch_all" || name == "fetch_single" || verb_prefixed(name, "get")
}

pub fn is_post(name: &str) -> bool {
    name == "create" || verb_prefixed(name, "set") || verb_prefixed(name, "do")
}

pub fn is_patch(name: &str) -> bool {
    name == "update"
}

pub fn is_delete(name: &str) -> bool {
    name == "delete"
}

/// True for developer-chosen verb-prefixed names. The standard CRUD names
/// (`fetch_all`, `fetch_single`, `create`, `update`, `delete`) are never
/// custom; bare `get`/`set`/`do` are.
pub fn is_custom(name: &str) -> bool {
    verb_prefixed(name, "get") || verb_prefixed(name, "set") || verb_prefixed(name, "do")
}

/// True for methods operating on one identified item; their URL gains an
/// `{id}` placeholder.
pub fn is_single_resource(name: &str) -> bool {
    name == "fetch_single" || name == "update" || name == "delete" || verb_prefixed(name, "do")
}

/// Verb bucket for a method name, if any.
pub fn verb_bucket(name: &str) -> Option<Verb> {
    if is_get(name) {
        Some(Verb::Get)
    } else if is_post(name) {
        Some(Verb::Post)
    } else if is_patch(name) {
        Some(Verb::Patch)
    } else if is_delete(name) {
        Some(Verb::Delete)
    } else {
        None
    }
}

/// Classify a method name. `None` means the name is excluded from routing
/// entirely — the expected majority case for helper methods.
pub fn classify(name: &str) -> Option<Classification> {
    verb_bucket(name).map(|verb| Classification {
        verb,
        custom: is_custom(name),
        single_resource: is_single_resource(name),
    })
}
