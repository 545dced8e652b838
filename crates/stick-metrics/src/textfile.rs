//! Atomic textfile writes.
//!
//! The textfile collector reads `*.prom` files at scrape time, so the file is
//! written under a temporary name in the same directory and renamed into
//! place.

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

/// Replace `path` with `contents`.
pub fn write_textfile(path: &Path, contents: &str) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("writing {}", tmp.path().display()))?;
    tmp.as_file().sync_all()?;
    tmp.as_file()
        .set_permissions(std::fs::Permissions::from_mode(0o644))
        .context("setting textfile permissions")?;

    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("renaming metrics file into {}", path.display()))?;

    debug!(path = %path.display(), bytes = contents.len(), "metrics textfile written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haproxy.prom");

        write_textfile(&path, "first\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n");

        write_textfile(&path, "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);

        // No temporary files left behind.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("haproxy.prom");
        let err = write_textfile(&path, "x").unwrap_err();
        assert!(format!("{err:#}").contains("creating temporary file"));
    }
}
