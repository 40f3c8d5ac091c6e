//! Route binding subsystem.
//!
//! # Data Flow
//! ```text
//! Loaded ActionResource[]
//!     → binder.rs (classify method table, synthesize URLs)
//!     → ActionRoute[] stored on each resource
//!     → sink.rs (register (verb, url, handler) with the dispatcher)
//!
//! Default sink: AxumSink → axum::Router, frozen after the build
//! ```
//!
//! # Design Decisions
//! - Routes are computed once per build, immutable afterwards
//! - The sink is a capability: the binder never touches transport
//! - A sink failure is reported per resource; sibling resources still bind

pub mod binder;
pub mod sink;

pub use sink::{AxumSink, BoundRoute, RouteSink};
