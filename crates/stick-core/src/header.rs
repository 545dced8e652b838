//! Table header validation.
//!
//! The first line of a `show table` dump describes the table:
//!
//! ```text
//! # table: table_requests_limiter_src_ip, type: ip, size:1048576, used:2
//! ```
//!
//! Only the name and type are checked. The size/usage counters vary between
//! HAProxy releases and are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{TableError, TableResult};

/// The only table type this crate understands.
pub const SUPPORTED_TABLE_TYPE: &str = "ip";

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s+table:\s*(?P<name>[A-Za-z0-9_.\-]+)\s*,\s*type:\s*(?P<kind>[[:alpha:]]+),")
        .expect("static regex must compile")
});

/// Name and type captured from a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeaderInfo<'a> {
    pub table_name: &'a str,
    pub table_type: &'a str,
}

/// Match a single line against the header grammar.
pub(crate) fn match_header(line: &str) -> Option<HeaderInfo<'_>> {
    let caps = HEADER_RE.captures(line)?;
    Some(HeaderInfo {
        table_name: caps.name("name")?.as_str(),
        table_type: caps.name("kind")?.as_str(),
    })
}

/// Check that `response` is a dump of the `ip` table named `expected_table`.
///
/// A response needs at least two lines: a header alone is rejected with
/// [`TableError::EmptyOrMalformedResponse`].
pub fn validate_header(response: &str, expected_table: &str) -> TableResult<()> {
    let mut lines = response.split('\n');
    let (Some(header), Some(_)) = (lines.next(), lines.next()) else {
        return Err(TableError::EmptyOrMalformedResponse);
    };

    let info = match_header(header).ok_or_else(|| TableError::HeaderParse(header.to_string()))?;

    if info.table_name != expected_table {
        return Err(TableError::TableNameMismatch {
            expected: expected_table.to_string(),
            found: info.table_name.to_string(),
        });
    }
    if info.table_type != SUPPORTED_TABLE_TYPE {
        return Err(TableError::UnsupportedTableType(info.table_type.to_string()));
    }

    tracing::debug!(table = info.table_name, "table header validated");
    Ok(())
}
