//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Discovery / Loader / Binder produce:
//!     → reporter.rs (info, warn, error diagnostics)
//!
//! Consumers:
//!     → tracing subscriber (default)
//!     → collecting reporters in tests
//! ```
//!
//! # Design Decisions
//! - Reporter is an injected capability, not a global singleton
//! - Diagnostics only: no component consults the reporter for control flow
//! - Default implementation forwards to the `tracing` macros

pub mod reporter;

pub use reporter::{Reporter, TracingReporter};
