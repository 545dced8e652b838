//! Runtime API exchange over a UNIX stream socket.

use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::debug;

use crate::command::ShowTableCommand;
use crate::error::{SocketError, SocketResult};

/// Send `command` to the socket at `socket` and return the trimmed response.
///
/// Connecting, sending and draining the response until HAProxy closes the
/// stream must all finish within `timeout`.
pub async fn query(socket: &Path, command: &ShowTableCommand, timeout: Duration) -> SocketResult<String> {
    command.validate()?;
    if socket.as_os_str().is_empty() {
        return Err(SocketError::InvalidArgument("socket"));
    }
    if timeout.is_zero() {
        return Err(SocketError::ZeroTimeout);
    }

    let raw = tokio::time::timeout(timeout, exchange(socket, command))
        .await
        .map_err(|_| SocketError::Timeout(timeout))??;

    Ok(trim_response(&raw).to_string())
}

async fn exchange(socket: &Path, command: &ShowTableCommand) -> SocketResult<String> {
    let mut stream = UnixStream::connect(socket)
        .await
        .map_err(|source| SocketError::Connect {
            path: socket.display().to_string(),
            source,
        })?;
    debug!(socket = %socket.display(), "connected to runtime API");

    let line = command.to_string();
    stream
        .write_all(line.as_bytes())
        .await
        .map_err(SocketError::Write)?;
    debug!(command = line.trim_end(), "command sent");

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.map_err(SocketError::Read)?;
    debug!(bytes = buf.len(), "response drained");

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Strip the interactive prompt, the final newline and surrounding
/// whitespace from a raw response.
pub fn trim_response(raw: &str) -> &str {
    let out = raw.strip_suffix("\n> ").unwrap_or(raw);
    let out = out.strip_suffix('\n').unwrap_or(out);
    out.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::UnixListener;

    const DUMP: &str = "# table: table_requests_limiter_src_ip, type: ip, size:1048576, used:11597\n\
                        0x7f6d48298b70: key=1.32.20.122 use=0 exp=26834 shard=0 http_req_rate(60000)=1\n\
                        0x55e0d8f5cc20: key=1.39.115.67 use=0 exp=44496 shard=0 http_req_rate(60000)=2321";

    fn command() -> ShowTableCommand {
        ShowTableCommand::new("table_requests_limiter_src_ip", "http_req_rate", 1)
    }

    #[test]
    fn trims_prompt_and_newlines() {
        assert_eq!(trim_response("a\nb\n\n> "), "a\nb");
        assert_eq!(trim_response("a\nb\n"), "a\nb");
        assert_eq!(trim_response("  a\nb  \n\n"), "a\nb");
        assert_eq!(trim_response(""), "");
    }

    #[tokio::test]
    async fn exchanges_command_and_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haproxy.sock");
        let listener = UnixListener::bind(&path).unwrap();

        let server = tokio::spawn(async move {
            let (mut conn, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 1024];
            let n = conn.read(&mut buf).await.unwrap();
            conn.write_all(format!("{DUMP}\n\n").as_bytes()).await.unwrap();
            String::from_utf8(buf[..n].to_vec()).unwrap()
        });

        let response = query(&path, &command(), Duration::from_secs(1)).await.unwrap();
        assert_eq!(response, DUMP);

        let received = server.await.unwrap();
        assert_eq!(
            received,
            "show table table_requests_limiter_src_ip data.http_req_rate gt 1\n"
        );
    }

    #[tokio::test]
    async fn connection_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haproxy.sock");
        std::fs::File::create(&path).unwrap();

        let err = query(&path, &command(), Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, SocketError::Connect { .. }), "{err}");
        assert!(err.to_string().starts_with("failed to connect to"));
    }

    #[tokio::test]
    async fn silent_peer_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("haproxy.sock");
        let listener = UnixListener::bind(&path).unwrap();

        let _server = tokio::spawn(async move {
            let (conn, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(conn);
        });

        let err = query(&path, &command(), Duration::from_millis(50)).await.unwrap_err();
        assert!(matches!(err, SocketError::Timeout(_)), "{err}");
    }

    #[tokio::test]
    async fn rejects_bad_arguments() {
        let timeout = Duration::from_secs(1);
        let path = Path::new("/nonexistent.sock");

        let err = query(path, &command(), Duration::ZERO).await.unwrap_err();
        assert!(matches!(err, SocketError::ZeroTimeout));

        let err = query(Path::new(""), &command(), timeout).await.unwrap_err();
        assert!(matches!(err, SocketError::InvalidArgument("socket")));

        let cmd = ShowTableCommand::new("", "http_req_rate", 1);
        let err = query(path, &cmd, timeout).await.unwrap_err();
        assert!(matches!(err, SocketError::InvalidArgument("table")));
    }
}
