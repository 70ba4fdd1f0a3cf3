//! # figpatch
//!
//! Replace image-prompt placeholders in ebook Markdown files with image
//! embeds and figure captions.
//!
//! ## Why this crate?
//!
//! Drafting an illustrated ebook usually happens in two passes: the text is
//! written with inline placeholders describing each wanted illustration
//! (`**[IMAGE PROMPT 3]**: A cutaway diagram of …`), and the images are
//! generated later from those descriptions. Once the PNG files exist, every
//! placeholder has to become a real Markdown embed pointing at the right
//! file in the right part-folder, with the description preserved as alt
//! text and a numbered figure caption. Doing that by hand across twenty
//! chapters is error-prone; this crate does it in one deterministic pass.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ebook directory
//!  │
//!  ├─ 1. Discover  enumerate *.md files, name-sorted, README.md skipped
//!  ├─ 2. Replace   scan each file for **[IMAGE PROMPT N]**: markers
//!  ├─ 3. Classify  chapter file name → images/<part-subdir>/
//!  └─ 4. Write     overwrite the file in place (or report, in dry-run)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use figpatch::{update_directory, UpdateConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), figpatch::FigpatchError> {
//!     let config = UpdateConfig::default();
//!     let summary = update_directory(Path::new("ebook"), &config)?;
//!     println!(
//!         "{} file(s) updated, {} image(s) replaced",
//!         summary.files_updated, summary.total_replaced
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `figpatch` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! figpatch = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod update;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{UpdateConfig, UpdateConfigBuilder};
pub use error::FigpatchError;
pub use output::UpdateSummary;
pub use pipeline::classify::subdir_for_chapter;
pub use pipeline::discover::markdown_files;
pub use pipeline::replace::replace_prompts;
pub use progress::{NoopProgressCallback, ProgressCallback, UpdateProgressCallback};
pub use update::{update_directory, update_file};
