//! Environment checks run before touching the runtime API.

use std::os::unix::fs::FileTypeExt;
use std::path::Path;

use anyhow::{Context, bail};

use crate::config::ExporterConfig;

/// Verify the socket and output locations are usable.
pub fn check(config: &ExporterConfig) -> anyhow::Result<()> {
    check_socket(&config.socket)?;
    check_output(&config.prometheus_file)?;
    Ok(())
}

/// `path` must exist and be a UNIX domain socket.
pub fn check_socket(path: &Path) -> anyhow::Result<()> {
    let meta = std::fs::metadata(path)
        .with_context(|| format!("cannot access socket {}", path.display()))?;
    if !meta.file_type().is_socket() {
        bail!("{} is not a UNIX socket", path.display());
    }
    Ok(())
}

/// The metrics file's directory must exist and accept new files, and the
/// file itself, if present, must not be a directory.
pub fn check_output(path: &Path) -> anyhow::Result<()> {
    if path.is_dir() {
        bail!("{} is a directory", path.display());
    }

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        bail!("output directory {} does not exist", dir.display());
    }

    tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("no write access to {}", dir.display()))?;
    Ok(())
}
