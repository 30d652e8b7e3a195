//! Bounded unified diff between two text snapshots

use similar::TextDiff;

/// Default cap on rendered diff lines before truncation kicks in
pub const DEFAULT_MAX_DIFF_LINES: usize = 2000;

/// Marker line inserted where truncation removed the middle of a diff
pub const TRUNCATION_MARKER: &str = "... (diff truncated) ...";

/// Render a unified diff of `previous` against `current`, bounded to at
/// most `max_lines + 1` lines.
///
/// When the rendered diff exceeds `max_lines`, the first and last
/// `max_lines / 2` lines are kept with a single truncation marker between
/// them, so a huge rewrite still shows both where the change starts and
/// where it ends. Pure function; deterministic for identical inputs.
pub fn unified_diff(previous: &str, current: &str, max_lines: usize) -> String {
    let diff = TextDiff::from_lines(previous, current);
    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header("previous", "current")
        .missing_newline_hint(false)
        .to_string();
    let rendered = rendered.trim_end_matches('\n');

    let lines: Vec<&str> = rendered.lines().collect();
    if lines.len() <= max_lines {
        return rendered.to_string();
    }

    let keep = max_lines / 2;
    let mut bounded: Vec<&str> = Vec::with_capacity(max_lines + 1);
    bounded.extend(&lines[..keep]);
    bounded.push(TRUNCATION_MARKER);
    bounded.extend(&lines[lines.len() - keep..]);
    bounded.join("\n")
}
