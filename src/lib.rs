//! # tabfmt
//!
//! Renders comma- or tab-separated text as a fixed-width bordered ASCII
//! table.
//!
//! Lines are split into fields, each column is sized to its widest field,
//! the widths are shrunk until the table fits a character budget, and
//! every row is rendered between `+---+` borders with long cells wrapped
//! at word boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabfmt::render_table;
//!
//! let table = render_table(["name,role", "ada,engineer"], ',', 80);
//! let expected = [
//!     "+------+----------+",
//!     "| name | role     |",
//!     "+------+----------+",
//!     "| ada  | engineer |",
//!     "+------+----------+",
//! ]
//! .join("\n");
//! assert_eq!(table, expected);
//! ```
//!
//! ## Pipeline
//!
//! - **fields**: split a line on its delimiter and trim each field
//! - **measure**: discover column widths and fit them to the budget
//! - **wrap**: break cell text at word boundaries
//! - **table**: assemble bordered rows from the pieces

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cells;
pub mod fields;
pub mod measure;
pub mod table;
pub mod wrap;

// Re-export the pipeline at the crate root
pub use fields::fields_from;
pub use measure::{fit, max_field_widths, table_width};
pub use table::{border_line, render_table, row_line, wrap_row};
pub use wrap::{split_to_fit, total_len};
