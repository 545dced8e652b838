//! stick-exporter — Prometheus textfile exporter for HAProxy stick-tables.
//!
//! Intended to run from cron. Each run asks HAProxy for the rows of one
//! `ip` stick-table whose rate counter exceeds a threshold and rewrites a
//! `.prom` file with one `haproxy_stick_table` gauge per client address.
//!
//! # Architecture
//!
//! ```text
//! run()
//!   ├── stick_socket::query()         → raw dump text
//!   ├── stick_core::validate_header() → right table, type ip
//!   ├── stick_core::parse_entries()   → address → rate
//!   └── stick_metrics                 → render + atomic write
//! ```

pub mod config;
pub mod preflight;
pub mod run;

pub use config::{ExporterConfig, PartialConfig};
pub use run::run;
