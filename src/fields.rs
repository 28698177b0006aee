//! Field extraction from delimited lines.
//!
//! One raw input line becomes one row: the line is stripped of outer space
//! characters, split on the delimiter, and each piece is trimmed. There is
//! no quoting or escape syntax: the delimiter is a literal character and
//! every occurrence splits.

/// Split a raw line into trimmed fields.
///
/// The line itself sheds leading and trailing spaces only, so a trailing
/// newline or tab survives to the last field, where the per-field trim
/// (which strips all whitespace) removes it. Splitting always yields at
/// least one field: an empty line produces a single empty field.
///
/// The returned slices borrow from `line`.
#[must_use]
pub fn fields_from(line: &str, delimiter: char) -> Vec<&str> {
    line.trim_matches(' ')
        .split(delimiter)
        .map(str::trim)
        .collect()
}
