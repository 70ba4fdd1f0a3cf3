//! Batch entry points: run the replacement pipeline over files on disk.
//!
//! These are the primary library entry points. [`update_file`] handles one
//! markdown file; [`update_directory`] is the whole-ebook driver — strictly
//! sequential, first error aborts the remaining files (earlier writes stay
//! written; a dry run writes nothing and so is always safe to re-run).

use crate::config::UpdateConfig;
use crate::error::FigpatchError;
use crate::output::UpdateSummary;
use crate::pipeline::{discover, replace};
use std::path::Path;
use tracing::{debug, info};

/// Replace every prompt marker in one markdown file.
///
/// Reads the file, runs the replacer with the file's stem as the chapter
/// name, and — when at least one marker matched and `config.dry_run` is off
/// — overwrites the file in place. Returns the replacement count; `0` means
/// the file was left untouched.
///
/// # Errors
/// [`FigpatchError::ReadFailed`] on a missing, unreadable, or non-UTF-8
/// file; [`FigpatchError::WriteFailed`] when the rewrite cannot be saved.
pub fn update_file(path: &Path, config: &UpdateConfig) -> Result<usize, FigpatchError> {
    let content = std::fs::read_to_string(path).map_err(|e| FigpatchError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let chapter_name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (updated, count) = replace::replace_prompts(&content, &chapter_name, config.alt_text_limit);

    if count > 0 && !config.dry_run {
        std::fs::write(path, updated).map_err(|e| FigpatchError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    debug!(
        "{}: {} replacement(s){}",
        path.display(),
        count,
        if config.dry_run { " (dry run)" } else { "" }
    );

    Ok(count)
}

/// Replace prompt markers in every markdown file of `dir`.
///
/// Files are processed in name order; names on `config.skip` (by default
/// just `README.md`) are excluded. Progress callbacks fire per file as the
/// batch advances.
pub fn update_directory(dir: &Path, config: &UpdateConfig) -> Result<UpdateSummary, FigpatchError> {
    info!(
        "Updating image references in {}{}",
        dir.display(),
        if config.dry_run { " (dry run)" } else { "" }
    );

    // ── Step 1: Discover candidates ──────────────────────────────────────
    let files: Vec<_> = discover::markdown_files(dir)?
        .into_iter()
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            let skipped = config.skip.iter().any(|s| s == name);
            if skipped {
                debug!("Skipping {}", name);
            }
            !skipped
        })
        .collect();

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_start(files.len());
    }

    // ── Step 2: Rewrite each file in order ───────────────────────────────
    let mut summary = UpdateSummary::default();
    for path in &files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let count = update_file(path, config)?;
        summary.files_scanned += 1;

        if count > 0 {
            summary.files_updated += 1;
            summary.total_replaced += count;
            if let Some(ref cb) = config.progress_callback {
                cb.on_file_updated(&name, count);
            }
        } else if let Some(ref cb) = config.progress_callback {
            cb.on_file_unchanged(&name);
        }
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_run_complete(summary.files_updated, summary.total_replaced);
    }

    info!(
        "Done: {} file(s) updated, {} image(s) replaced",
        summary.files_updated, summary.total_replaced
    );

    Ok(summary)
}
