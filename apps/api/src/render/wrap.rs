//! Greedy word wrap against the standard-font metric tables.

use crate::render::font_metrics::{get_metrics, StandardFont};
use crate::render::sanitize::sanitize;

/// Wraps `text` into lines whose measured width stays strictly below `max_width`.
///
/// Text is sanitized first and split on single spaces, so runs of spaces survive
/// inside a line. A word that alone is wider than `max_width` is emitted on its
/// own line rather than broken. Blank input yields no lines.
pub fn wrap_text(text: &str, max_width: f32, font: StandardFont, size: f32) -> Vec<String> {
    let clean = sanitize(text);
    if clean.trim().is_empty() {
        return Vec::new();
    }

    let metrics = get_metrics(font);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in clean.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if metrics.width_at_size(&candidate, size) < max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::font_metrics::text_width;

    const BODY: StandardFont = StandardFont::Helvetica;

    #[test]
    fn test_blank_input_yields_no_lines() {
        assert!(wrap_text("", 500.0, BODY, 10.0).is_empty());
        assert!(wrap_text("    ", 500.0, BODY, 10.0).is_empty());
    }

    #[test]
    fn test_unsupported_only_input_yields_no_lines() {
        assert!(wrap_text("世界 🚀", 500.0, BODY, 10.0).is_empty());
    }

    #[test]
    fn test_short_text_is_single_line() {
        assert_eq!(wrap_text("Go Rust", 500.0, BODY, 10.0), vec!["Go Rust"]);
    }

    #[test]
    fn test_lines_fit_within_width() {
        let text = "Architected a distributed caching layer using Redis and consistent hashing, \
                    reducing p99 latency by 40% under 50k RPS peak load across three regions";
        let max = 200.0;
        let lines = wrap_text(text, max, BODY, 10.0);
        assert!(lines.len() > 1, "text should wrap, got {lines:?}");
        for line in &lines {
            assert!(
                text_width(line, BODY, 10.0) < max,
                "line {line:?} exceeds {max}"
            );
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_overlong_word_stands_alone() {
        let long = "Supercalifragilisticexpialidocious";
        let lines = wrap_text(&format!("a {long} b"), 60.0, BODY, 10.0);
        assert_eq!(lines, vec!["a", long, "b"]);
        assert!(text_width(long, BODY, 10.0) >= 60.0);
    }

    #[test]
    fn test_repeated_spaces_are_kept() {
        let lines = wrap_text("one   two", 500.0, BODY, 10.0);
        assert_eq!(lines, vec!["one   two"]);
    }

    #[test]
    fn test_leading_spaces_are_dropped() {
        assert_eq!(wrap_text("  lead", 500.0, BODY, 10.0), vec!["lead"]);
    }

    #[test]
    fn test_exact_width_line_breaks() {
        // Acceptance is strictly below the limit.
        let width = text_width("alpha beta", BODY, 10.0);
        let lines = wrap_text("alpha beta", width, BODY, 10.0);
        assert_eq!(lines, vec!["alpha", "beta"]);
    }
}
