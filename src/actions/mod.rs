//! Action discovery and classification subsystem.
//!
//! # Data Flow
//! ```text
//! actions folder (handler source files)
//!     → discover.rs (list files, derive module/type names)
//!     → registry.rs (resolve constructors, instantiate singletons)
//!     → classify.rs + url.rs (method name → verb, custom, single-resource → path)
//!     → routing::binder (ActionRoute set, registered with the sink)
//!
//! Build state (one-shot per build):
//!     Empty → Discovered → Loaded → Bound → Ready
//! ```
//!
//! # Design Decisions
//! - Names drive everything: file name → module slug → type name,
//!   method name → verb and URL shape
//! - Classification is a pure function of the method name alone
//! - Per-resource isolation: one broken action never takes down siblings
//! - A fresh build always restarts from Empty with a new resource set

pub mod action;
pub mod classify;
pub mod discover;
pub mod registry;
pub mod resource;
pub mod url;

pub use action::{Action, ActionMethod, MethodHandler};
pub use discover::{ActionSource, FsSource};
pub use registry::ActionRegistry;
pub use resource::{ActionResource, ActionRoute, Verb};
