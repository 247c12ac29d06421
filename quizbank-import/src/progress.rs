//! Import progress reporting.

/// Trait for receiving batch-import progress updates.
pub trait ImportProgress {
    /// Called after each file is processed.
    fn on_file(&self, current: usize, total: usize, label: &str);

    /// Called when the batch is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _current: usize, _total: usize, _label: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_file(&self, current: usize, total: usize, label: &str) {
        log::info!("  [{}/{}] {}", current, total, label);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
