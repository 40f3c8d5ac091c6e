//! Error taxonomy for the action build pipeline.
//!
//! Every error here is caught at the component boundary that produces it,
//! reported, and downgraded to an empty or partial result for that one unit
//! of work. No error escapes a build call.

use thiserror::Error;

/// Boxed error type used at the constructor and sink boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures produced while discovering, loading, or binding actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The actions folder could not be read during discovery.
    #[error("unable to read actions folder `{folder}`: {source}")]
    SourceUnavailable {
        folder: String,
        #[source]
        source: std::io::Error,
    },

    /// An action type could not be resolved or constructed.
    #[error("unable to load `{module}` action (type `{type_name}`): {reason}")]
    Resolution {
        module: String,
        type_name: String,
        reason: String,
    },

    /// An action's routes could not be registered with the route sink.
    #[error("unable to bind `{module}` action methods to routes: {reason}")]
    Binding { module: String, reason: String },
}
