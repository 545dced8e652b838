//! stick-core — grammar and parsing for HAProxy `show table` dumps.
//!
//! Turns the text returned by `show table <name> data.<store> gt <n>` into a
//! verified map of client address → counter.
//!
//! # Pipeline
//!
//! ```text
//! response text
//!   ├── validate_header() → name/type checks on line 1
//!   └── parse_entries()   → ParsedTable (rows that fail the grammar are dropped)
//! ```
//!
//! Rows that do not fit the row grammar are skipped silently. Everything else
//! that goes wrong is a [`TableError`] and aborts the parse with no partial
//! result.

pub mod entries;
pub mod error;
pub mod header;
pub mod render;

pub use entries::{ParsedTable, RowFields, match_row, parse_entries};
pub use error::{ErrorKind, TableError, TableResult};
pub use header::{SUPPORTED_TABLE_TYPE, validate_header};
pub use render::{render_row, render_table};
