// One request/response exchange on the Kea Unix control socket.
// Kea answers a single command and closes the connection.

use std::path::Path;

#[cfg(unix)]
pub(super) async fn query(path: &Path, command: &str) -> anyhow::Result<Vec<u8>> {
    use anyhow::Context;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut stream = tokio::net::UnixStream::connect(path)
        .await
        .with_context(|| format!("could not connect to {}", path.display()))?;
    stream
        .write_all(command.as_bytes())
        .await
        .context("could not send command")?;

    let mut response = Vec::with_capacity(16 * 1024);
    stream
        .read_to_end(&mut response)
        .await
        .context("could not read response")?;
    anyhow::ensure!(
        !response.is_empty(),
        "Kea closed {} without answering",
        path.display()
    );
    Ok(response)
}

#[cfg(not(unix))]
pub(super) async fn query(path: &Path, _command: &str) -> anyhow::Result<Vec<u8>> {
    anyhow::bail!(
        "control socket {} needs a Unix platform; configure kea.stats_file and kea.config_file instead",
        path.display()
    )
}
