//! Width-aware text helpers for column alignment.

use unicode_width::UnicodeWidthStr;

/// Returns the display width of `s` in terminal columns.
///
/// Uses Unicode width rules, so CJK characters count as two columns and
/// combining marks as zero; byte or char counts would misalign such cells.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `s` with trailing spaces up to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut padded = String::with_capacity(s.len() + (width - current));
    padded.push_str(s);
    padded.push_str(&" ".repeat(width - current));
    padded
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pad_right_produces_exact_width_when_larger(
            s in "[a-zA-Z0-9 ]{0,20}",
            extra in 1usize..30,
        ) {
            let target = display_width(&s) + extra;
            prop_assert_eq!(display_width(&pad_right(&s, target)), target);
        }

        #[test]
        fn pad_right_never_changes_content(
            s in "[a-zA-Z0-9 ]{0,20}",
            width in 0usize..40,
        ) {
            let padded = pad_right(&s, width);
            prop_assert!(padded.starts_with(&s));
            prop_assert!(padded[s.len()..].chars().all(|c| c == ' '));
        }
    }
}
