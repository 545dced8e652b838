use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stick_exporter::{ExporterConfig, PartialConfig, preflight};

#[derive(Parser)]
#[command(
    name = "haproxy-table-exporter",
    about = "A Prometheus textfile exporter for querying and exporting metrics from a specific stick-table in HAProxy",
    long_about = "A Prometheus exporter for querying HAProxy stick-tables and generating metrics.\n\
It sends the \"show table <stick-table-name>\" command to HAProxy via a UNIX socket\n\
and creates the metric haproxy_stick_table with client IPs as labels.\n\n\
This tool supports only IP-type stick-tables with a single rate counter.\n\
It is intended to run as a cron job and requires write access to the UNIX socket\n\
and the metrics directory.",
    version
)]
struct Cli {
    /// TOML file with default settings; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Path to the UNIX socket that HAProxy listens on [default: /var/lib/haproxy/stats]
    #[arg(short, long, value_name = "PATH")]
    socket: Option<PathBuf>,

    /// File to export the generated Prometheus metrics
    /// [default: /var/cache/textfile_collector/haproxy_rate_limit_entries.prom]
    #[arg(short, long, value_name = "PATH")]
    prometheus_file: Option<PathBuf>,

    /// Name of the stick-table to query for entries [default: table_requests_limiter_src_ip]
    #[arg(short = 't', long, value_name = "NAME")]
    stick_table: Option<String>,

    /// Minimum request rate for a client IP to be included in the metric [default: 1]
    #[arg(short, long, value_name = "RATE")]
    minimum_request_rate: Option<u64>,

    /// Stick-table data type holding the rate counter [default: http_req_rate]
    #[arg(long, value_name = "TYPE")]
    store_type: Option<String>,

    /// Deadline for the whole socket exchange, e.g. 500ms, 2s [default: 1s]
    #[arg(long, value_name = "DURATION")]
    timeout: Option<String>,
}

impl Cli {
    fn overrides(&self) -> PartialConfig {
        PartialConfig {
            socket: self.socket.clone(),
            stick_table: self.stick_table.clone(),
            prometheus_file: self.prometheus_file.clone(),
            minimum_request_rate: self.minimum_request_rate,
            store_type: self.store_type.clone(),
            timeout: self.timeout.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => PartialConfig::from_file(path)?,
        None => PartialConfig::default(),
    };
    let config = ExporterConfig::resolve(cli.overrides(), file)?;

    preflight::check(&config)?;
    stick_exporter::run(&config).await?;
    Ok(())
}
