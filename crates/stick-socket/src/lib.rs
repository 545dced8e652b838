//! stick-socket — HAProxy runtime API client.
//!
//! Sends a single `show table` command over the stats socket and returns the
//! dump text with the trailing prompt removed. One connection per query; the
//! whole exchange runs under one deadline. No retries: the caller's
//! scheduler decides when to try again.

pub mod client;
pub mod command;
pub mod error;

pub use client::{query, trim_response};
pub use command::ShowTableCommand;
pub use error::{SocketError, SocketResult};
