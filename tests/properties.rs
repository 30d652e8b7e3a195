//! Property-based tests for the pure pipeline stages.

use proptest::prelude::*;

use pagewatch::{normalize, unified_diff, TRUNCATION_MARKER};

fn visible_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,20}"
}

proptest! {
    #[test]
    fn normalize_is_deterministic(html in ".{0,400}") {
        prop_assert_eq!(normalize(&html), normalize(&html));
    }

    #[test]
    fn normalize_output_has_no_blank_or_padded_lines(
        lines in proptest::collection::vec(visible_line(), 0..10),
    ) {
        let html = format!(
            "<html><body>{}</body></html>",
            lines
                .iter()
                .map(|l| format!("<p>  {l}  </p>"))
                .collect::<String>(),
        );
        let text = normalize(&html);
        for line in text.lines() {
            prop_assert!(!line.is_empty());
            prop_assert_eq!(line, line.trim());
        }
    }

    #[test]
    fn inserting_a_script_block_never_changes_normalization(
        lines in proptest::collection::vec(visible_line(), 1..8),
        noise in "[a-z0-9 =;()]{0,40}",
    ) {
        let body: String = lines.iter().map(|l| format!("<p>{l}</p>")).collect();
        let plain = format!("<html><body>{body}</body></html>");
        let noisy = format!("<html><body><script>{noise}</script>{body}</body></html>");
        prop_assert_eq!(normalize(&plain), normalize(&noisy));
    }

    #[test]
    fn diff_is_bounded_to_max_lines_plus_marker(
        old_lines in proptest::collection::vec(visible_line(), 0..120),
        new_lines in proptest::collection::vec(visible_line(), 0..120),
        max_lines in 4usize..60,
    ) {
        let old = old_lines.join("\n");
        let new = new_lines.join("\n");
        let diff = unified_diff(&old, &new, max_lines);
        prop_assert!(diff.lines().count() <= max_lines + 1);
    }

    #[test]
    fn unbounded_diff_never_contains_marker(
        old_lines in proptest::collection::vec(visible_line(), 0..40),
        new_lines in proptest::collection::vec(visible_line(), 0..40),
    ) {
        let old = old_lines.join("\n");
        let new = new_lines.join("\n");
        let diff = unified_diff(&old, &new, usize::MAX);
        prop_assert!(!diff.contains(TRUNCATION_MARKER));
    }
}
