use std::sync::OnceLock;

use regex::Regex;

/// Collapse horizontal whitespace and line breaks into their canonical form.
///
/// Every run of spaces and tabs becomes a single space, then every run of
/// line breaks (`\r\n`, `\r` and `\n` are equivalent) becomes a single `\n`.
/// The horizontal pass never matches across a line break, so the two passes
/// do not interfere.
pub fn normalize_whitespace(text: &str) -> String {
    static RE_HSPACE: OnceLock<Regex> = OnceLock::new();
    let re_hspace = RE_HSPACE.get_or_init(|| Regex::new(r"[ \t]+").unwrap());

    static RE_BREAKS: OnceLock<Regex> = OnceLock::new();
    let re_breaks = RE_BREAKS.get_or_init(|| Regex::new(r"(?:\r\n|\r|\n)+").unwrap());

    let collapsed = re_hspace.replace_all(text, " ");
    re_breaks.replace_all(&collapsed, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(input in "[ \t\r\nab\u{e9}\u{b}]{0,64}") {
            let once = normalize_whitespace(&input);
            prop_assert_eq!(normalize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_collapses_spaces_and_tabs() {
        assert_eq!(normalize_whitespace("a   b\t\tc"), "a b c");
    }

    #[test]
    fn test_mixed_space_tab_run() {
        assert_eq!(normalize_whitespace("a \t \tb"), "a b");
    }

    #[test]
    fn test_collapses_line_breaks() {
        assert_eq!(normalize_whitespace("a\n\n\nb\r\nc"), "a\nb\nc");
    }

    #[test]
    fn test_lone_carriage_returns() {
        assert_eq!(normalize_whitespace("a\r\rb\r\n\r\nc"), "a\nb\nc");
    }

    #[test]
    fn test_spaces_around_newline_are_kept_separate() {
        // Horizontal collapsing stops at the line break.
        assert_eq!(normalize_whitespace("a  \n  b"), "a \n b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "plain",
            "a   b\t\tc",
            "a\n\n\nb\r\nc",
            " \t lead and trail \t ",
            "\r\n\r\n\t\r",
            "H e l l o  World\nGoodbye\tFriend",
        ];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_no_double_spaces_or_breaks_remain() {
        let out = normalize_whitespace("x \t  y\n\n\r\n z\t\t\n\nw");
        assert!(!out.contains("  "));
        assert!(!out.contains('\t'));
        assert!(!out.contains("\n\n"));
        assert!(!out.contains('\r'));
    }
}
