//! Greedy word-boundary line splitting.
//!
//! Cells wider than their column are folded over several physical lines.
//! Each fold takes the longest prefix that fits the column, preferring to
//! break at the last space inside that window; only a word longer than the
//! whole column is cut mid-word. The splitter never looks past the window,
//! so a word that starts inside it but runs over still breaks at the last
//! space before it.

use crate::cells::{char_len, chop_chars};

/// Split `text` into a prefix of at most `limit` characters and the rest.
///
/// `limit` is raised to at least 1 so progress is always possible. Text
/// that already fits comes back whole with an empty remainder. Otherwise
/// the first `limit` characters form a candidate: if it contains a space,
/// the split lands on the last one and the remainder keeps that space (the
/// caller strips it before the next round); with no space in the candidate
/// the cut is a hard one at exactly `limit` characters.
///
/// Both halves are zero-copy slices of `text` and concatenate back to it.
#[must_use]
pub fn split_to_fit(text: &str, limit: usize) -> (&str, &str) {
    let limit = limit.max(1);
    if char_len(text) <= limit {
        return (text, "");
    }

    let (candidate, _) = chop_chars(text, limit);
    match candidate.rfind(' ') {
        Some(space) => (&text[..space], &text[space..]),
        None => chop_chars(text, limit),
    }
}

/// Summed character length of a row's fields.
///
/// Drives the wrap loop: a row keeps producing fragment lines until the
/// remaining text in every column is empty.
#[must_use]
pub fn total_len(fields: &[&str]) -> usize {
    fields.iter().map(|field| char_len(field)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_to_fit_word_boundaries() {
        let input = "deselect the selected";
        assert_eq!(char_len(input), 21);

        assert_eq!(split_to_fit(input, 25), ("deselect the selected", ""));
        assert_eq!(split_to_fit(input, 21), ("deselect the selected", ""));
        assert_eq!(split_to_fit(input, 20), ("deselect the", " selected"));
        assert_eq!(split_to_fit(input, 15), ("deselect the", " selected"));
        assert_eq!(split_to_fit(input, 12), ("deselect", " the selected"));
        assert_eq!(split_to_fit(input, 11), ("deselect", " the selected"));
        assert_eq!(split_to_fit(input, 9), ("deselect", " the selected"));
        assert_eq!(split_to_fit(input, 8), ("deselect", " the selected"));
    }

    #[test]
    fn test_split_to_fit_hard_cut_without_space() {
        let input = "deselect the selected";
        assert_eq!(split_to_fit(input, 7), ("deselec", "t the selected"));
        assert_eq!(split_to_fit(input, 1), ("d", "eselect the selected"));
    }

    #[test]
    fn test_split_to_fit_limit_floor_is_one() {
        let input = "deselect the selected";
        assert_eq!(split_to_fit(input, 0), ("d", "eselect the selected"));
    }

    #[test]
    fn test_split_to_fit_empty_input() {
        assert_eq!(split_to_fit("", 5), ("", ""));
        assert_eq!(split_to_fit("", 0), ("", ""));
    }

    #[test]
    fn test_split_to_fit_halves_concatenate_back() {
        let input = "hit a cell in a current user's booking";
        for limit in 0..=char_len(input) + 1 {
            let (prefix, suffix) = split_to_fit(input, limit);
            assert_eq!(format!("{prefix}{suffix}"), input);
            assert!(char_len(prefix) <= limit.max(1));
        }
    }

    #[test]
    fn test_split_to_fit_multibyte() {
        assert_eq!(split_to_fit("déjà vu effet", 8), ("déjà vu", " effet"));
        assert_eq!(split_to_fit("déjà vu effet", 7), ("déjà", " vu effet"));
        assert_eq!(split_to_fit("déjà vu effet", 6), ("déjà", " vu effet"));
        assert_eq!(split_to_fit("日本語のテスト", 3), ("日本語", "のテスト"));
    }

    #[test]
    fn test_total_len() {
        assert_eq!(total_len(&[""]), 0);
        assert_eq!(total_len(&["", "0.1", "select cell", ".cancelling"]), 25);
    }
}
