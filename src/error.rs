//! Error types for the figpatch library.
//!
//! Every error here is fatal to the run: the batch is strictly sequential
//! and a failed read or write on one file aborts the remaining files.
//! Files already rewritten before the failure stay rewritten — callers that
//! need all-or-nothing semantics should run with `dry_run` first.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the figpatch library.
#[derive(Debug, Error)]
pub enum FigpatchError {
    // ── Directory errors ──────────────────────────────────────────────────
    /// The ebook directory was not found at the given path.
    #[error("Directory not found: '{path}'\nCheck the path exists and is readable.")]
    DirNotFound { path: PathBuf },

    /// The given path exists but is not a directory.
    #[error("Not a directory: '{path}'\nPass the ebook directory, not a file inside it.")]
    NotADirectory { path: PathBuf },

    /// The directory exists but its entries could not be listed.
    #[error("Failed to list '{path}': {source}")]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── File I/O errors ───────────────────────────────────────────────────
    /// A markdown file could not be read. Also raised for non-UTF-8 content
    /// (`io::ErrorKind::InvalidData`).
    #[error("Failed to read '{path}': {source}\nFiles must be UTF-8-encoded text.")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The updated content could not be written back in place.
    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_not_found_display_names_the_path() {
        let e = FigpatchError::DirNotFound {
            path: PathBuf::from("/no/such/ebook"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/no/such/ebook"), "got: {msg}");
    }

    #[test]
    fn read_failed_display_mentions_utf8() {
        let e = FigpatchError::ReadFailed {
            path: PathBuf::from("chapter1.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        let msg = e.to_string();
        assert!(msg.contains("chapter1.md"));
        assert!(msg.contains("UTF-8"));
    }

    #[test]
    fn write_failed_carries_source() {
        use std::error::Error as _;
        let e = FigpatchError::WriteFailed {
            path: PathBuf::from("chapter2.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn invalid_config_display() {
        let e = FigpatchError::InvalidConfig("alt_text_limit must be ≥ 1".into());
        assert!(e.to_string().contains("alt_text_limit"));
    }
}
