use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub kea: KeaConfig,
    #[serde(default)]
    pub exporter: ExporterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Where the Kea control socket lives, and optional file stand-ins for its answers.
#[derive(Debug, Clone, Deserialize)]
pub struct KeaConfig {
    pub socket_path: PathBuf,
    /// Read `statistic-get-all` output from this file instead of the socket.
    pub stats_file: Option<PathBuf>,
    /// Read `config-get` output from this file instead of the socket.
    pub config_file: Option<PathBuf>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_request_timeout_ms() -> u64 {
    3000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExporterConfig {
    /// Prefix of every exported metric name.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

fn default_namespace() -> String {
    "kea".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub color: bool,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.kea.socket_path.as_os_str().is_empty(),
            "kea.socket_path must be non-empty"
        );
        anyhow::ensure!(
            self.kea
                .stats_file
                .as_ref()
                .is_none_or(|p| !p.as_os_str().is_empty()),
            "kea.stats_file must be non-empty when set"
        );
        anyhow::ensure!(
            self.kea
                .config_file
                .as_ref()
                .is_none_or(|p| !p.as_os_str().is_empty()),
            "kea.config_file must be non-empty when set"
        );
        anyhow::ensure!(
            self.kea.request_timeout_ms > 0,
            "kea.request_timeout_ms must be > 0, got {}",
            self.kea.request_timeout_ms
        );
        anyhow::ensure!(
            is_valid_namespace(&self.exporter.namespace),
            "exporter.namespace must match [a-zA-Z_:][a-zA-Z0-9_:]*, got {:?}",
            self.exporter.namespace
        );
        Ok(())
    }
}

fn is_valid_namespace(ns: &str) -> bool {
    let mut chars = ns.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == ':')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}
