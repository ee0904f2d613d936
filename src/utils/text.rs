//! Text helpers for feed content and terminal output.

/// Collapse every run of whitespace (including newlines) into a single space
/// and trim both ends.
///
/// This is deliberately broader than swapping each newline for a space: runs
/// of spaces with no newline (`"a  b"`) also collapse, so arXiv's indented
/// continuation lines never leave double spaces. Applying it twice gives the
/// same result as applying it once.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep the first `max_chars` characters of `text`, appending `...` when
/// anything was cut. Counts chars, not bytes, so multi-byte text is never
/// split mid-character.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(
            normalize_whitespace("Attention Is All\n  You Need"),
            "Attention Is All You Need"
        );
        assert_eq!(normalize_whitespace("\n  Leading and trailing \n"), "Leading and trailing");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "",
            "plain",
            "  two  spaces  ",
            "multi\nline\n\nsummary with\ttabs",
            "already normalized text",
        ];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_normalize_collapses_space_runs() {
        assert_eq!(normalize_whitespace("a  b"), "a b");
        assert_eq!(normalize_whitespace("a \t b"), "a b");
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize_whitespace("  \n\t "), "");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_with_ellipsis("Hi", 8), "Hi");
        assert_eq!(truncate_with_ellipsis("exactly", 7), "exactly");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("Hello World", 5), "Hello...");

        let summary = "x".repeat(250);
        let shown = truncate_with_ellipsis(&summary, 200);
        assert_eq!(shown.len(), 203);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte() {
        let text = "é".repeat(10);
        assert_eq!(truncate_with_ellipsis(&text, 3), "ééé...");
    }
}
