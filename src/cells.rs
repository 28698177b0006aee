//! Character-count cell sizing.
//!
//! Table layout measures text in characters: every `char` occupies exactly
//! one cell, so a column that is ten cells wide holds ten characters. This
//! deliberately sidesteps terminal-width tables (CJK doubling, zero-width
//! combining marks); delimited data files are overwhelmingly ASCII and the
//! simple count keeps the layout arithmetic exact and reversible.

/// Number of characters in `text`.
///
/// This is the unit of width everywhere in the crate; it is not `str::len`,
/// which counts bytes.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the boundary after `count` characters, or the end of the
/// string when it has fewer.
fn byte_index_at(text: &str, count: usize) -> usize {
    text.char_indices()
        .nth(count)
        .map_or(text.len(), |(index, _)| index)
}

/// Split a string after at most `count` characters.
///
/// Returns `(head, tail)` as zero-copy slices; `head` holds the first
/// `count` characters (or the whole string when it is shorter).
#[must_use]
pub fn chop_chars(text: &str, count: usize) -> (&str, &str) {
    let at = byte_index_at(text, count);
    (&text[..at], &text[at..])
}

/// Shape a string to exactly `width` characters.
///
/// Longer text is truncated, shorter text is right-padded with spaces, so
/// the result always measures `width` under [`char_len`].
#[must_use]
pub fn set_cell_size(text: &str, width: usize) -> String {
    let current = char_len(text);

    if current == width {
        return text.to_string();
    }

    if current < width {
        let padding = width - current;
        return format!("{text}{}", " ".repeat(padding));
    }

    chop_chars(text, width).0.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_ascii() {
        assert_eq!(char_len(""), 0);
        assert_eq!(char_len("hello"), 5);
        assert_eq!(char_len("Hello, World!"), 13);
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        assert_eq!(char_len("déjà"), 4);
        assert_eq!(char_len("日本語"), 3);
        assert_eq!("日本語".len(), 9);
    }

    #[test]
    fn test_chop_chars_ascii() {
        assert_eq!(chop_chars("hello world", 5), ("hello", " world"));
        assert_eq!(chop_chars("hello", 0), ("", "hello"));
        assert_eq!(chop_chars("hello", 5), ("hello", ""));
        assert_eq!(chop_chars("hello", 99), ("hello", ""));
    }

    #[test]
    fn test_chop_chars_multibyte_boundary() {
        assert_eq!(chop_chars("déjà vu", 2), ("dé", "jà vu"));
        assert_eq!(chop_chars("日本語", 1), ("日", "本語"));
    }

    #[test]
    fn test_set_cell_size_pad() {
        let result = set_cell_size("hi", 5);
        assert_eq!(result, "hi   ");
        assert_eq!(char_len(&result), 5);
    }

    #[test]
    fn test_set_cell_size_truncate() {
        assert_eq!(set_cell_size("hello world", 5), "hello");
    }

    #[test]
    fn test_set_cell_size_exact() {
        assert_eq!(set_cell_size("hello", 5), "hello");
    }

    #[test]
    fn test_set_cell_size_empty_and_zero() {
        assert_eq!(set_cell_size("", 4), "    ");
        assert_eq!(set_cell_size("abc", 0), "");
        assert_eq!(set_cell_size("", 0), "");
    }

    #[test]
    fn test_set_cell_size_multibyte() {
        assert_eq!(set_cell_size("déjà", 2), "dé");
        assert_eq!(set_cell_size("日本語", 5), "日本語  ");
    }
}
