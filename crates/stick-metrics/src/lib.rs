//! stick-metrics — publish parsed stick-tables for Prometheus.
//!
//! Follows the textfile exporter pattern: a periodic job renders the
//! exposition text and drops it where node_exporter's textfile collector
//! picks it up.
//!
//! ```text
//! ParsedTable
//!   └── render_prometheus() → exposition text
//!         └── write_textfile() → temp file + rename
//! ```

pub mod prometheus;
pub mod textfile;

pub use prometheus::{METRIC_NAME, render_prometheus};
pub use textfile::write_textfile;
