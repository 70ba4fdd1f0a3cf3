//! Chapter-name → image-subdirectory classification.
//!
//! Generated images are organised under `images/` by book part, while the
//! markdown files themselves sit flat in the ebook directory. The mapping
//! from a chapter's file name to its part folder is a fixed ordered table
//! of substring tokens, checked top to bottom with first match wins.
//!
//! Token tests are plain substring containment, not word-boundary matches,
//! and rows are evaluated strictly in order: a name like `chapter10`
//! contains the token `chapter1` and therefore lands in the first row
//! (`part1-foundation`), never reaching the `chapter10` token in the third
//! row. The same holds for `chapter13`/`chapter14` (match `chapter1`) and
//! `chapter20`–`chapter22` (match `chapter2`). The `partN` tokens are what
//! actually route those chapters when files are named by part. Image trees
//! produced by earlier runs depend on these paths, so the table order is
//! load-bearing.

/// Fallback when no token matches the chapter name.
pub const DEFAULT_SUBDIR: &str = "images";

/// Ordered (tokens, subdirectory) rows; first row with any contained token wins.
const CLASSIFICATION: &[(&[&str], &str)] = &[
    (&["part1", "chapter1", "chapter2", "chapter3"], "part1-foundation"),
    (
        &["part2", "chapter4", "chapter5", "chapter6", "chapter7"],
        "part2-configuration",
    ),
    (
        &["part3", "chapter8", "chapter9", "chapter10", "chapter11", "chapter12"],
        "part3-advanced",
    ),
    (&["part4", "chapter13", "chapter14"], "part4-operations"),
    (
        &["part5", "chapter15", "chapter16", "chapter17", "chapter18"],
        "part5-development",
    ),
    (&["part6", "chapter19", "chapter20"], "part6-analysis"),
    (&["part7", "chapter21", "chapter22"], "part7-vision"),
    (&["appendix"], "appendices"),
];

/// Pick the image subdirectory for a chapter file name (without extension).
pub fn subdir_for_chapter(chapter_name: &str) -> &'static str {
    for (tokens, subdir) in CLASSIFICATION {
        if tokens.iter().any(|t| chapter_name.contains(t)) {
            return subdir;
        }
    }
    DEFAULT_SUBDIR
}
