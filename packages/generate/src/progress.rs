//! Progress reporting trait for long-running generation.
//!
//! Defines a [`ProgressCallback`] trait that decouples progress reporting
//! from any specific rendering backend (e.g., `indicatif` progress bars or
//! silence). The `indicatif` implementation lives in
//! `employee_csv_cli_utils`.

use std::sync::Arc;

/// Trait for reporting progress from long-running operations.
///
/// Implementations must be `Send + Sync` so a rendering backend can redraw
/// from its own ticker thread.
pub trait ProgressCallback: Send + Sync {
    /// Set the total expected units of work (enables percentage/ETA).
    fn set_total(&self, total: u64);

    /// Advance progress by `delta` units.
    fn inc(&self, delta: u64);

    /// Mark progress as complete with a final message.
    fn finish(&self, msg: String);

    /// Mark progress as complete and remove the progress indicator.
    fn finish_and_clear(&self);
}

/// A no-op implementation of [`ProgressCallback`] that silently ignores
/// all progress updates.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn finish(&self, _msg: String) {}
    fn finish_and_clear(&self) {}
}

/// Returns a shared [`NullProgress`] instance for convenient use.
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
