// Kea control channel: statistics and configuration documents, from the socket or from files

mod socket;

use crate::config::KeaConfig;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

pub const STATS_COMMAND: &str = r#"{"command":"statistic-get-all","arguments":{}}"#;
pub const CONFIG_COMMAND: &str = r#"{"command":"config-get"}"#;

pub struct KeaRepo {
    socket_path: PathBuf,
    stats_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    request_timeout: Duration,
}

impl KeaRepo {
    pub fn new(config: &KeaConfig) -> Self {
        Self {
            socket_path: config.socket_path.clone(),
            stats_file: config.stats_file.clone(),
            config_file: config.config_file.clone(),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
        }
    }

    /// Raw `statistic-get-all` response.
    #[instrument(skip(self), fields(repo = "kea", operation = "fetch_stats"))]
    pub async fn fetch_stats(&self) -> anyhow::Result<Bytes> {
        self.fetch(STATS_COMMAND, self.stats_file.as_deref())
            .await
            .context("could not get raw JSON stats")
    }

    /// Raw `config-get` response.
    #[instrument(skip(self), fields(repo = "kea", operation = "fetch_config"))]
    pub async fn fetch_config(&self) -> anyhow::Result<Bytes> {
        self.fetch(CONFIG_COMMAND, self.config_file.as_deref())
            .await
            .context("could not query Kea for config")
    }

    async fn fetch(&self, command: &str, file: Option<&Path>) -> anyhow::Result<Bytes> {
        let raw = match file {
            Some(path) => {
                debug!(path = %path.display(), "reading Kea response from file");
                tokio::fs::read(path)
                    .await
                    .with_context(|| format!("could not read {}", path.display()))?
            }
            None => {
                debug!(path = %self.socket_path.display(), "querying Kea control socket");
                tokio::time::timeout(
                    self.request_timeout,
                    socket::query(&self.socket_path, command),
                )
                .await
                .map_err(|_| {
                    anyhow::anyhow!(
                        "Kea control socket {} did not answer within {:?}",
                        self.socket_path.display(),
                        self.request_timeout
                    )
                })??
            }
        };
        debug!(size = raw.len(), "Kea response received");
        Ok(Bytes::from(raw))
    }
}
