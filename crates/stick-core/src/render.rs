//! Render tables back into `show table` dump text.
//!
//! Output always satisfies the header and row grammars, so
//! `parse_entries(render_table(..))` returns the input map.

use std::fmt::Write;
use std::net::IpAddr;

use crate::entries::ParsedTable;
use crate::header::SUPPORTED_TABLE_TYPE;

/// Render one row. `slot` stands in for HAProxy's entry pointer.
pub fn render_row(slot: u64, address: IpAddr, store_type: &str, period_ms: u64, rate: u64) -> String {
    format!("0x{slot:012x}: key={address} use=0 exp=0 shard=0 {store_type}({period_ms})={rate}")
}

/// Render a full dump: header line followed by one row per entry, sorted by
/// address.
pub fn render_table(table_name: &str, store_type: &str, period_ms: u64, table: &ParsedTable) -> String {
    let mut entries: Vec<_> = table.iter().collect();
    entries.sort();

    let mut out = String::new();
    let _ = write!(
        out,
        "# table: {table_name}, type: {SUPPORTED_TABLE_TYPE}, size:1048576, used:{}",
        entries.len()
    );
    for (i, (address, rate)) in entries.into_iter().enumerate() {
        out.push('\n');
        out.push_str(&render_row(i as u64 + 1, *address, store_type, period_ms, *rate));
    }
    out
}
