//! One exporter run: query, validate, parse, publish.

use anyhow::Context;
use tracing::info;

use stick_core::{parse_entries, validate_header};
use stick_metrics::{render_prometheus, write_textfile};
use stick_socket::ShowTableCommand;

use crate::config::ExporterConfig;

/// Query the stick-table once and rewrite the metrics file.
///
/// Returns the number of exported entries. Nothing is written unless the
/// whole dump validates and parses.
pub async fn run(config: &ExporterConfig) -> anyhow::Result<usize> {
    let command = ShowTableCommand::new(
        config.stick_table.as_str(),
        config.store_type.as_str(),
        config.minimum_request_rate,
    );

    let response = stick_socket::query(&config.socket, &command, config.timeout)
        .await
        .with_context(|| format!("querying {}", config.socket.display()))?;

    validate_header(&response, &config.stick_table)?;
    let table = parse_entries(&response, &config.store_type)?;
    info!(
        table = %config.stick_table,
        store_type = %config.store_type,
        entries = table.len(),
        "stick-table parsed"
    );

    let text = render_prometheus(&config.stick_table, &config.store_type, &table);
    write_textfile(&config.prometheus_file, &text)?;
    info!(path = %config.prometheus_file.display(), "metrics exported");

    Ok(table.len())
}
