//! Bordered ASCII table rendering.
//!
//! The renderer turns raw delimited lines into the classic plus-and-dash
//! layout:
//!
//! ```text
//! +-----+------+
//! | aaa | bbbb |
//! +-----+------+
//! ```
//!
//! Every row sits between horizontal border lines. A cell wider than its
//! column wraps onto continuation lines, so a row is as tall as its
//! tallest cell; short rows are padded with blank cells; lines whose
//! fields are all empty are dropped from the output entirely.

use log::debug;

use crate::cells::set_cell_size;
use crate::fields::fields_from;
use crate::measure::{fit, max_field_widths};
use crate::wrap::{split_to_fit, total_len};

/// One rendered content line.
///
/// Each cell is padded or truncated to its column width; a row with fewer
/// cells than columns gets all-space cells for the missing trailing
/// columns. Cells are joined with `" | "` and the line is bounded by
/// `"| "` and `" |"`.
#[must_use]
pub fn row_line(widths: &[usize], cells: &[&str]) -> String {
    let shaped: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(column, &width)| set_cell_size(cells.get(column).copied().unwrap_or(""), width))
        .collect();
    format!("| {} |", shaped.join(" | "))
}

/// Horizontal border line: a run of `width + 2` dashes per column, joined
/// and bounded by `+`.
#[must_use]
pub fn border_line(widths: &[usize]) -> String {
    let runs: Vec<String> = widths.iter().map(|&width| "-".repeat(width + 2)).collect();
    format!("+{}+", runs.join("+"))
}

/// Fold one row into physical lines, wrapping each cell at its column
/// width.
///
/// Repeatedly takes a fitting prefix from every column (via
/// [`split_to_fit`]), renders those prefixes as one line, and carries the
/// leftovers, stripped of leading whitespace, into the next round. Columns
/// exhaust independently: a short cell contributes blank space while its
/// neighbors keep wrapping, so the row ends up as tall as its tallest
/// cell. Fields beyond the width vector are ignored; missing trailing
/// fields read as empty.
#[must_use]
pub fn wrap_row(widths: &[usize], fields: &[&str]) -> Vec<String> {
    let mut remaining: Vec<&str> = (0..widths.len())
        .map(|column| fields.get(column).copied().unwrap_or(""))
        .collect();

    let mut lines = Vec::new();
    while total_len(&remaining) > 0 {
        let mut prefixes = Vec::with_capacity(widths.len());
        for (cell, &width) in remaining.iter_mut().zip(widths) {
            let (prefix, suffix) = split_to_fit(*cell, width);
            prefixes.push(prefix);
            *cell = suffix.trim_start();
        }
        lines.push(row_line(widths, &prefixes));
    }
    lines
}

/// Render delimited lines as a bordered table.
///
/// The whole pipeline in one call: discover the natural column widths,
/// shrink them to the `budget`, then emit a border line followed by each
/// row's wrapped lines and a closing border. Rows whose fields are all
/// empty are skipped entirely, adding neither content nor an extra
/// border, so input of nothing but blank lines renders as a single
/// border. The result carries no trailing newline.
#[must_use]
pub fn render_table<I, S>(lines: I, delimiter: char, budget: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let widths = fit(&max_field_widths(&lines, delimiter), budget);
    debug!("fitted column widths {widths:?} for budget {budget}");

    let border = border_line(&widths);
    let mut rendered = vec![border.clone()];
    for line in &lines {
        let fields = fields_from(line.as_ref(), delimiter);
        if total_len(&fields) == 0 {
            continue;
        }
        rendered.extend(wrap_row(&widths, &fields));
        rendered.push(border.clone());
    }
    rendered.join("\n")
}
