//! Exporter configuration.
//!
//! Values come from three layers, highest priority first: command-line
//! flags, an optional TOML file, built-in defaults.
//!
//! ```toml
//! socket = "/var/lib/haproxy/stats"
//! stick_table = "table_requests_limiter_src_ip"
//! prometheus_file = "/var/cache/textfile_collector/haproxy_rate_limit_entries.prom"
//! minimum_request_rate = 1
//! store_type = "http_req_rate"
//! timeout = "1s"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use serde::Deserialize;

pub const DEFAULT_SOCKET: &str = "/var/lib/haproxy/stats";
pub const DEFAULT_STICK_TABLE: &str = "table_requests_limiter_src_ip";
pub const DEFAULT_PROMETHEUS_FILE: &str =
    "/var/cache/textfile_collector/haproxy_rate_limit_entries.prom";
pub const DEFAULT_MINIMUM_REQUEST_RATE: u64 = 1;
pub const DEFAULT_STORE_TYPE: &str = "http_req_rate";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// One configuration layer. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub socket: Option<PathBuf>,
    pub stick_table: Option<String>,
    pub prometheus_file: Option<PathBuf>,
    pub minimum_request_rate: Option<u64>,
    pub store_type: Option<String>,
    pub timeout: Option<String>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: PartialConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Fill unset fields of `self` from `lower`.
    pub fn or(self, lower: PartialConfig) -> PartialConfig {
        PartialConfig {
            socket: self.socket.or(lower.socket),
            stick_table: self.stick_table.or(lower.stick_table),
            prometheus_file: self.prometheus_file.or(lower.prometheus_file),
            minimum_request_rate: self.minimum_request_rate.or(lower.minimum_request_rate),
            store_type: self.store_type.or(lower.store_type),
            timeout: self.timeout.or(lower.timeout),
        }
    }
}

/// Fully resolved settings for one exporter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    pub socket: PathBuf,
    pub stick_table: String,
    pub prometheus_file: PathBuf,
    pub minimum_request_rate: u64,
    pub store_type: String,
    pub timeout: Duration,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            socket: PathBuf::from(DEFAULT_SOCKET),
            stick_table: DEFAULT_STICK_TABLE.to_string(),
            prometheus_file: PathBuf::from(DEFAULT_PROMETHEUS_FILE),
            minimum_request_rate: DEFAULT_MINIMUM_REQUEST_RATE,
            store_type: DEFAULT_STORE_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ExporterConfig {
    /// Merge flag and file layers over the defaults.
    pub fn resolve(flags: PartialConfig, file: PartialConfig) -> anyhow::Result<Self> {
        let merged = flags.or(file);
        let defaults = Self::default();

        let timeout = match merged.timeout {
            Some(raw) => match parse_duration(&raw) {
                Some(d) if !d.is_zero() => d,
                _ => bail!("invalid timeout '{raw}': expected e.g. \"500ms\", \"2s\" or \"1m\""),
            },
            None => defaults.timeout,
        };

        let config = Self {
            socket: merged.socket.unwrap_or(defaults.socket),
            stick_table: merged.stick_table.unwrap_or(defaults.stick_table),
            prometheus_file: merged.prometheus_file.unwrap_or(defaults.prometheus_file),
            minimum_request_rate: merged
                .minimum_request_rate
                .unwrap_or(defaults.minimum_request_rate),
            store_type: merged.store_type.unwrap_or(defaults.store_type),
            timeout,
        };

        if config.stick_table.is_empty() {
            bail!("stick-table name cannot be empty");
        }
        if config.store_type.is_empty() {
            bail!("store type cannot be empty");
        }
        Ok(config)
    }
}

/// Parse a duration string like "5s", "500ms", "1m".
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(secs) = s.strip_suffix('s') {
        if let Some(ms) = secs.strip_suffix('m') {
            ms.parse::<u64>().ok().map(Duration::from_millis)
        } else {
            secs.parse::<u64>().ok().map(Duration::from_secs)
        }
    } else if let Some(mins) = s.strip_suffix('m') {
        mins.parse::<u64>().ok().map(|m| Duration::from_secs(m * 60))
    } else {
        s.parse::<u64>().ok().map(Duration::from_secs)
    }
}
