//! Column width discovery and budget fitting.
//!
//! Widths travel through the pipeline as a `Vec<usize>`, one entry per
//! column. Discovery scans every row for the widest field seen in each
//! column; fitting then shrinks the widest columns, a whole tier at a
//! time, until the rendered table fits the caller's width budget.

use log::trace;

use crate::cells::char_len;
use crate::fields::fields_from;

/// Per-column maximum field width across all lines.
///
/// The vector grows to match the longest row encountered, so ragged input
/// never errors: short rows simply leave the extra columns untouched and
/// earlier rows implicitly give new columns a width of zero.
#[must_use]
pub fn max_field_widths<I, S>(lines: I, delimiter: char) -> Vec<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut widths: Vec<usize> = Vec::new();
    for line in lines {
        for (column, field) in fields_from(line.as_ref(), delimiter).iter().enumerate() {
            let width = char_len(field);
            if let Some(entry) = widths.get_mut(column) {
                *entry = (*entry).max(width);
            } else {
                widths.push(width);
            }
        }
    }
    widths
}

/// Total rendered width of a table with the given column widths.
///
/// Every content line is `"| "` + cells joined by `" | "` + `" |"`, so the
/// borders and edge padding contribute 4 characters and each gap between
/// columns contributes 3. Border lines come out to the same length.
#[must_use]
pub fn table_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1) + 4
}

/// Shrink column widths until the table fits the `budget`.
///
/// Returns a vector of the same length with every entry at most its input
/// value. Widths that already fit come back unchanged. Otherwise each pass
/// clamps every column wider than a computed limit down to that limit, so
/// the widest columns give way first while narrow ones keep their size.
/// The limit drops strictly each pass and the loop terminates even
/// when the budget is smaller than the fixed border overhead (the widths
/// then collapse to zero rather than going negative).
#[must_use]
pub fn fit(widths: &[usize], budget: usize) -> Vec<usize> {
    let mut widths = widths.to_vec();
    loop {
        if widths.iter().sum::<usize>() == 0 {
            return widths;
        }
        let total = table_width(&widths);
        if total <= budget {
            return widths;
        }

        // widest - overflow / columns, evaluated without division error
        // as (widest * columns - overflow) / columns and floored at zero.
        let overflow = total - budget;
        let columns = widths.len();
        let widest = widths.iter().copied().max().unwrap_or(0);
        let limit = (widest * columns).saturating_sub(overflow) / columns;
        trace!("table {total} over budget {budget}: clamping columns to {limit}");

        for width in &mut widths {
            if *width > limit {
                *width = limit;
            }
        }
    }
}
