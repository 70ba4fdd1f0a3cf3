//! CLI binary for figpatch.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `UpdateConfig` and prints per-file progress plus a summary.

use anyhow::{Context, Result};
use clap::Parser;
use figpatch::{update_directory, UpdateConfig, UpdateProgressCallback};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

// ── CLI progress callback ────────────────────────────────────────────────────

/// Terminal progress callback: one line per updated file, as the batch runs.
struct CliProgressCallback {
    dry_run: bool,
}

impl UpdateProgressCallback for CliProgressCallback {
    fn on_file_updated(&self, name: &str, replaced: usize) {
        if self.dry_run {
            println!(
                "{} Would update {name}: {replaced} image(s)",
                cyan("[DRY RUN]")
            );
        } else {
            println!("{} Updated {name}: {replaced} image(s) replaced", green("✓"));
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Rewrite placeholders in the current directory's markdown files
  figpatch

  # Preview the changes without writing anything
  figpatch --dry-run

  # Point at the ebook directory explicitly
  figpatch --dir docs/ebook

WHAT GETS REPLACED:
  **[IMAGE PROMPT 3]**: A cutaway diagram of the pool
  becomes
  ![A cutaway diagram of the pool](images/<part-subdir>/<chapter>-3.png)

  *Figure 3: A cutaway diagram of the pool...*

ENVIRONMENT VARIABLES:
  FIGPATCH_DIR   Ebook directory (same as --dir)
  RUST_LOG       Tracing filter override (e.g. figpatch=debug)
"#;

/// Replace image-prompt placeholders in ebook Markdown with figure embeds.
#[derive(Parser, Debug)]
#[command(
    name = "figpatch",
    version,
    about = "Replace image-prompt placeholders in ebook Markdown with figure embeds",
    long_about = "Scan an ebook directory's markdown files for **[IMAGE PROMPT N]**: placeholders \
and replace each with an image embed and a numbered figure caption, choosing the image \
subdirectory from the chapter's file name. Files are rewritten in place; README.md is skipped.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Ebook directory containing the chapter markdown files.
    #[arg(long, env = "FIGPATCH_DIR", default_value = ".")]
    dir: PathBuf,

    /// Compute and report changes without writing any file.
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "FIGPATCH_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "FIGPATCH_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The per-file lines are the user-facing feedback; library logs stay at
    // error level unless explicitly requested.
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if cli.dry_run && !cli.quiet {
        println!("=== DRY RUN MODE ===");
        println!("No files will be modified.\n");
    }

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = UpdateConfig::builder().dry_run(cli.dry_run);
    if !cli.quiet {
        builder = builder.progress_callback(Arc::new(CliProgressCallback {
            dry_run: cli.dry_run,
        }));
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run ──────────────────────────────────────────────────────────────
    let summary = update_directory(&cli.dir, &config)
        .with_context(|| format!("Failed to update '{}'", cli.dir.display()))?;

    if !cli.quiet {
        let prefix = if cli.dry_run { "[DRY RUN] " } else { "" };
        println!("\n{prefix}Summary:");
        println!("  Files processed: {}", summary.files_updated);
        println!("  Total images replaced: {}", summary.total_replaced);

        if cli.dry_run {
            println!("\n{}", dim("Run without --dry-run to apply changes."));
        } else {
            println!("\nImage references updated successfully!");
        }
    }

    Ok(())
}
