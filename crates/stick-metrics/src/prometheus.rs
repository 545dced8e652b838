//! Prometheus text exposition format.
//!
//! Renders a parsed stick-table as a single gauge family for the
//! node_exporter textfile collector.

use stick_core::{ParsedTable, SUPPORTED_TABLE_TYPE};

/// Name of the exported gauge family.
pub const METRIC_NAME: &str = "haproxy_stick_table";

/// Render `table` as a `haproxy_stick_table` gauge family.
///
/// Each sample carries `client_ip`, `name` (the table) and `type` labels.
/// Samples are sorted by address so repeated runs produce stable files.
pub fn render_prometheus(table_name: &str, store_type: &str, table: &ParsedTable) -> String {
    let mut out = String::new();

    let help = format!(
        "Tracks the '{store_type}' per client IP address as observed by custom stick-table in HAProxy"
    );
    out.push_str(&format!("# HELP {METRIC_NAME} {}\n", escape_help(&help)));
    out.push_str(&format!("# TYPE {METRIC_NAME} gauge\n"));

    let mut entries: Vec<_> = table.iter().collect();
    entries.sort();

    let name = escape_label_value(table_name);
    for (address, rate) in entries {
        out.push_str(&format!(
            "{METRIC_NAME}{{client_ip=\"{address}\",name=\"{name}\",type=\"{SUPPORTED_TABLE_TYPE}\"}} {rate}\n"
        ));
    }

    out
}

fn escape_help(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\n', "\\n")
}

fn escape_label_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
