//! Error types for stick-table dump validation and parsing.

use thiserror::Error;

/// Result type alias for stick-table parsing operations.
pub type TableResult<T> = Result<T, TableError>;

/// Fatal conditions raised while validating or parsing a table dump.
///
/// Every variant aborts the whole parse. Rows that merely fail the row
/// grammar are not errors; the parser drops them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("response is empty or malformed")]
    EmptyOrMalformedResponse,

    #[error("failed to parse table header, got '{0}'")]
    HeaderParse(String),

    #[error("table name mismatch: expected '{expected}', got '{found}'")]
    TableNameMismatch { expected: String, found: String },

    #[error("unsupported table type '{0}': only 'ip' type is supported")]
    UnsupportedTableType(String),

    #[error("store type mismatch: expected '{expected}', but found '{found}'")]
    StoreTypeMismatch { expected: String, found: String },

    #[error("failed to parse IP address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },

    #[error("failed to parse rate '{value}': {reason}")]
    InvalidRate { value: String, reason: String },

    #[error("duplicate key detected: {0}")]
    DuplicateKey(std::net::IpAddr),
}

/// Payload-free category of a [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyOrMalformedResponse,
    HeaderParse,
    TableNameMismatch,
    UnsupportedTableType,
    StoreTypeMismatch,
    InvalidAddress,
    InvalidRate,
    DuplicateKey,
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::EmptyOrMalformedResponse => ErrorKind::EmptyOrMalformedResponse,
            TableError::HeaderParse(_) => ErrorKind::HeaderParse,
            TableError::TableNameMismatch { .. } => ErrorKind::TableNameMismatch,
            TableError::UnsupportedTableType(_) => ErrorKind::UnsupportedTableType,
            TableError::StoreTypeMismatch { .. } => ErrorKind::StoreTypeMismatch,
            TableError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            TableError::InvalidRate { .. } => ErrorKind::InvalidRate,
            TableError::DuplicateKey(_) => ErrorKind::DuplicateKey,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offending_values() {
        let err = TableError::HeaderParse("# tabel: x".to_string());
        assert_eq!(err.to_string(), "failed to parse table header, got '# tabel: x'");

        let err = TableError::StoreTypeMismatch {
            expected: "http_req_rate".to_string(),
            found: "conn_cnt".to_string(),
        };
        assert!(err.to_string().contains("'http_req_rate'"));
        assert!(err.to_string().contains("'conn_cnt'"));
    }

    #[test]
    fn kind_matches_variant() {
        let addr: std::net::IpAddr = "10.0.0.1".parse().unwrap();
        assert_eq!(TableError::DuplicateKey(addr).kind(), ErrorKind::DuplicateKey);
        assert_eq!(
            TableError::UnsupportedTableType("string".into()).kind(),
            ErrorKind::UnsupportedTableType
        );
    }
}
