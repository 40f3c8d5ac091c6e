//! Build diagnostics reporting.

/// Capability for surfacing build diagnostics.
///
/// Discovery, loading, and binding each receive a reporter explicitly;
/// nothing in the pipeline reads ambient logging state. Reports never
/// influence control flow.
pub trait Reporter: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default reporter backed by the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
