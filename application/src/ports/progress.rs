//! Progress notification port
//!
//! Defines the interface for reporting pipeline stage transitions.

use mobility_domain::PipelineStage;

/// Callback for progress updates during a route request
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called on every stage transition, terminal stages included
    fn on_stage(&self, stage: PipelineStage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage(&self, _stage: PipelineStage) {}
}
