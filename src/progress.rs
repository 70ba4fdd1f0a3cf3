//! Progress-callback trait for per-file run events.
//!
//! Inject an [`Arc<dyn UpdateProgressCallback>`] via
//! [`crate::config::UpdateConfigBuilder::progress_callback`] to receive
//! events as the batch processes each file.
//!
//! # Why callbacks instead of return values?
//!
//! The library could simply return per-file outcomes in the summary, but a
//! CLI wants to print `✓ Updated …` lines *as files are processed*, not
//! after the run. The callback is the least-invasive integration point: the
//! library stays ignorant of how the host application talks to its user.
//! All methods have default no-op implementations so callers only override
//! what they care about.

use std::sync::Arc;

/// Called by [`crate::update_directory`] as it processes each file.
///
/// The batch is strictly sequential, so calls arrive in file order and
/// never concurrently; `Send + Sync` is still required so the same
/// implementation can be shared across threads by the host application.
pub trait UpdateProgressCallback: Send + Sync {
    /// Called once before any file is processed.
    ///
    /// # Arguments
    /// * `total_files` — number of candidate files after skip-list filtering
    fn on_run_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called when a file had markers and was rewritten (or would have
    /// been, in dry-run mode).
    ///
    /// # Arguments
    /// * `name`     — file name (no directory)
    /// * `replaced` — number of markers replaced in this file
    fn on_file_updated(&self, name: &str, replaced: usize) {
        let _ = (name, replaced);
    }

    /// Called when a file contained no markers and was left untouched.
    fn on_file_unchanged(&self, name: &str) {
        let _ = name;
    }

    /// Called once after all files have been processed.
    ///
    /// # Arguments
    /// * `files_updated`  — files with at least one replacement
    /// * `total_replaced` — replacements across the whole run
    fn on_run_complete(&self, files_updated: usize, total_replaced: usize) {
        let _ = (files_updated, total_replaced);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl UpdateProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::UpdateConfig`].
pub type ProgressCallback = Arc<dyn UpdateProgressCallback>;
