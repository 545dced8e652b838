//! `show table` command construction.

use std::fmt;

use crate::error::{SocketError, SocketResult};

/// A `show table <table> data.<store> gt <min>` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowTableCommand {
    pub table: String,
    pub store_type: String,
    /// Rows with a counter at or below this value are filtered by HAProxy.
    pub minimum_rate: u64,
}

impl ShowTableCommand {
    pub fn new(table: impl Into<String>, store_type: impl Into<String>, minimum_rate: u64) -> Self {
        Self {
            table: table.into(),
            store_type: store_type.into(),
            minimum_rate,
        }
    }

    /// Reject commands HAProxy would misinterpret.
    pub fn validate(&self) -> SocketResult<()> {
        if self.store_type.is_empty() {
            return Err(SocketError::InvalidArgument("store type"));
        }
        if self.table.is_empty() {
            return Err(SocketError::InvalidArgument("table"));
        }
        Ok(())
    }
}

impl fmt::Display for ShowTableCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "show table {} data.{} gt {}",
            self.table, self.store_type, self.minimum_rate
        )
    }
}
