//! Marker replacement: rewrite `**[IMAGE PROMPT N]**:` placeholders.
//!
//! ## The marker grammar
//!
//! A marker starts anywhere in a line with the literal
//! `**[IMAGE PROMPT <digits>]**:` followed by at least one character. Its
//! description is the rest of that line plus every immediately following
//! line that is non-empty and does not open a new section (`##`) or a new
//! marker (`**[`). The match never crosses a blank line, so prose after
//! the placeholder paragraph is untouched.
//!
//! The source tool expressed this as one regex with a negative lookahead;
//! the `regex` crate has no lookahead, so the rule is split into a marker
//! regex plus an explicit continuation scan with the same boundaries. The
//! ordinal is kept as the matched digit string, never parsed — `07` stays
//! `07` in both the file name and the caption.

use crate::pipeline::classify::subdir_for_chapter;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker line pattern. `(.+)` requires at least one character after the
/// colon — a bare `**[IMAGE PROMPT 3]**:` at end of line is not a marker.
static RE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*\[IMAGE PROMPT (\d+)\]\*\*:(.+)").unwrap());

/// Replace every prompt marker in `content`, returning the updated content
/// and the number of replacements made.
///
/// `chapter_name` is the source file's stem; it selects the image
/// subdirectory and becomes the file-name prefix of each referenced image.
/// `alt_limit` caps the alt text (in characters, before the `...` caption
/// suffix).
///
/// Pure function: no I/O. Running it again on its own output yields zero
/// further replacements, since replacement blocks contain no marker.
pub fn replace_prompts(content: &str, chapter_name: &str, alt_limit: usize) -> (String, usize) {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut count = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        let Some(caps) = RE_MARKER.captures(line) else {
            out.push(line.to_string());
            i += 1;
            continue;
        };

        let span = caps.get(0).expect("match 0 always present");
        let prompt_num = &caps[1];
        let mut description = caps[2].to_string();

        // Consume continuation lines. These are part of the description and
        // are not themselves scanned for markers — a marker mid-continuation
        // is swallowed, matching the source tool's greedy first-line capture.
        i += 1;
        while i < lines.len() && is_continuation(lines[i]) {
            description.push('\n');
            description.push_str(lines[i]);
            i += 1;
        }

        let block = replacement_block(prompt_num, description.trim(), chapter_name, alt_limit);
        out.push(format!("{}{}", &line[..span.start()], block));
        count += 1;
    }

    (out.join("\n"), count)
}

/// A description continues onto `line` unless the line is blank, opens a
/// section heading, or opens another marker.
fn is_continuation(line: &str) -> bool {
    !line.is_empty() && !line.starts_with("##") && !line.starts_with("**[")
}

/// Render the embed + caption block for one marker.
fn replacement_block(
    prompt_num: &str,
    description: &str,
    chapter_name: &str,
    alt_limit: usize,
) -> String {
    let subdir = subdir_for_chapter(chapter_name);
    let image_path = format!("images/{}/{}-{}.png", subdir, chapter_name, prompt_num);
    let alt_text = build_alt_text(description, alt_limit);

    format!(
        "![{alt_text}]({image_path})\n\n*Figure {prompt_num}: {alt_text}...*"
    )
}

/// Truncate the description to `limit` characters, then flatten newlines to
/// spaces and double quotes to single quotes so the result is safe inside
/// `![...]` and the caption.
fn build_alt_text(description: &str, limit: usize) -> String {
    let truncated: String = description.chars().take(limit).collect();
    truncated.replace('\n', " ").replace('"', "'")
}
