//! Stick-table row parsing.
//!
//! Every line after the header describes one tracked client:
//!
//! ```text
//! 0x7fcf0c057200: key=127.0.0.1 use=0 exp=58330 shard=0 http_req_rate(60000)=3
//! ```
//!
//! Only tables storing a single rate counter are supported. One `gpcN=` field
//! may precede the counter; any other extra column makes the row unmatched.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{TableError, TableResult};

/// Client address → counter value, one entry per table row.
pub type ParsedTable = HashMap<IpAddr, u64>;

static ROW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*0x[[:alnum:]]+: ",
        r"key=(?P<key>[0-9a-fA-F:.]+) ",
        r"use=[0-9]+ ",
        r"exp=[0-9]+ ",
        r"shard=[0-9]+",
        r"(?: gpc[0-9]=[0-9]+)? ",
        r"(?P<store>[[:alnum:]_]+)",
        r"\([0-9]+\)=(?P<rate>[0-9]+)$",
    ))
    .expect("static regex must compile")
});

/// Raw fields captured from a row that matched the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFields<'a> {
    pub key: &'a str,
    pub store_type: &'a str,
    pub rate: &'a str,
}

/// Match one line against the row grammar. Never fails; a line that does
/// not fit is reported as `None`.
pub fn match_row(line: &str) -> Option<RowFields<'_>> {
    let caps = ROW_RE.captures(line)?;
    Some(RowFields {
        key: caps.name("key")?.as_str(),
        store_type: caps.name("store")?.as_str(),
        rate: caps.name("rate")?.as_str(),
    })
}

/// Parse every row of a table dump into an address → rate map.
///
/// Rows that do not match the grammar are skipped. A matched row whose
/// store type differs from `expected_store_type`, whose fields fail to
/// convert, or whose address was already seen aborts the whole parse.
pub fn parse_entries(response: &str, expected_store_type: &str) -> TableResult<ParsedTable> {
    if response.is_empty() {
        return Err(TableError::EmptyOrMalformedResponse);
    }

    let mut table = ParsedTable::new();
    let mut skipped = 0usize;

    for line in response.split('\n').skip(1) {
        let Some(row) = match_row(line) else {
            skipped += 1;
            continue;
        };

        if row.store_type != expected_store_type {
            return Err(TableError::StoreTypeMismatch {
                expected: expected_store_type.to_string(),
                found: row.store_type.to_string(),
            });
        }

        let address: IpAddr = row.key.parse().map_err(|e: std::net::AddrParseError| {
            TableError::InvalidAddress {
                value: row.key.to_string(),
                reason: e.to_string(),
            }
        })?;

        let rate: u64 = row.rate.parse().map_err(|e: std::num::ParseIntError| {
            TableError::InvalidRate {
                value: row.rate.to_string(),
                reason: e.to_string(),
            }
        })?;

        // Two rows for one key means HAProxy produced a broken dump.
        match table.entry(address) {
            Entry::Occupied(_) => return Err(TableError::DuplicateKey(address)),
            Entry::Vacant(slot) => {
                slot.insert(rate);
            }
        }
    }

    debug!(entries = table.len(), skipped, "parsed stick-table rows");
    Ok(table)
}
