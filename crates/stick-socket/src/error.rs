//! Transport error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while querying the HAProxy runtime API.
#[derive(Debug, Error)]
pub enum SocketError {
    #[error("{0} argument cannot be empty")]
    InvalidArgument(&'static str),

    #[error("timeout argument must be greater than zero")]
    ZeroTimeout,

    #[error("failed to connect to {path} UNIX socket: {source}")]
    Connect {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send command to socket: {0}")]
    Write(#[source] std::io::Error),

    #[error("error reading from socket: {0}")]
    Read(#[source] std::io::Error),

    #[error("runtime API did not answer within {0:?}")]
    Timeout(Duration),
}

pub type SocketResult<T> = Result<T, SocketError>;
