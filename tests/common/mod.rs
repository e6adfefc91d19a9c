// Shared test fixtures: canned Kea responses and a fake control socket
#![allow(dead_code)]

use kea_exporter::config::KeaConfig;
use std::path::{Path, PathBuf};

/// `statistic-get-all` answer: globals, subnet 1 with a pool, subnet 2 absent from config,
/// and a statistic this exporter does not know.
pub const STATS_JSON: &str = r#"{
  "result": 0,
  "arguments": {
    "pkt4-received": [[120, "2023-09-14 00:08:10.270215"], [100, "2023-09-14 00:07:10.000000"]],
    "pkt4-sent": [[80, "2023-09-14 00:08:10.270215"]],
    "pkt4-ack-sent": [[40, "2023-09-14 00:08:10.270215"]],
    "pkt4-discover-received": [[50, "2023-09-14 00:08:10.270215"]],
    "cumulative-assigned-addresses": [[17, "2023-09-14 00:08:10"]],
    "declined-addresses": [[1, "2023-09-14 00:08:10"]],
    "some-future-metric": [[999, "2023-09-14 00:08:10"]],
    "subnet[1].total-addresses": [[200, "2023-09-14 00:00:00"]],
    "subnet[1].assigned-addresses": [[7, "2023-09-14 00:08:05.000000"], [5, "2023-09-14 00:08:10.270215"]],
    "subnet[1].pool[0].total-addresses": [[150, "2023-09-14 00:00:00"]],
    "subnet[1].pool[0].assigned-addresses": [[4, "2023-09-14 00:08:10"]],
    "subnet[2].total-addresses": [[10, "2023-09-14 00:00:00"]]
  }
}"#;

/// `config-get` answer naming subnet 1 only.
pub const CONFIG_JSON: &str = r#"{
  "result": 0,
  "arguments": {
    "Dhcp4": {
      "subnet4": [
        { "id": 1, "subnet": "192.0.2.0/24", "pools": [ { "pool": "192.0.2.10 - 192.0.2.159" } ] }
      ],
      "valid-lifetime": 4000
    },
    "hash": "0123456789"
  }
}"#;

pub fn socket_config(socket_path: &Path) -> KeaConfig {
    KeaConfig {
        socket_path: socket_path.to_path_buf(),
        stats_file: None,
        config_file: None,
        request_timeout_ms: 1000,
    }
}

/// Writes both documents into `dir` and points a KeaConfig at them.
pub fn file_config(dir: &Path, stats: &str, config: &str) -> KeaConfig {
    let stats_path = dir.join("stats.json");
    let config_path = dir.join("config.json");
    std::fs::write(&stats_path, stats).unwrap();
    std::fs::write(&config_path, config).unwrap();
    KeaConfig {
        socket_path: dir.join("unused.sock"),
        stats_file: Some(stats_path),
        config_file: Some(config_path),
        request_timeout_ms: 1000,
    }
}

/// Minimal Kea control socket: reads one command per connection, answers, closes.
pub fn spawn_fake_kea(path: PathBuf, stats: &str, config: &str) -> tokio::task::JoinHandle<()> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::UnixListener::bind(&path).unwrap();
    let stats = stats.to_string();
    let config = config.to_string();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let stats = stats.clone();
            let config = config.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let command = String::from_utf8_lossy(&buf[..n]).to_string();
                let answer = if command.contains("statistic-get-all") {
                    stats
                } else if command.contains("config-get") {
                    config
                } else {
                    r#"{"result": 2, "text": "unknown command"}"#.to_string()
                };
                let _ = stream.write_all(answer.as_bytes()).await;
            });
        }
    })
}

/// Accepts connections and never answers.
pub fn spawn_silent_kea(path: PathBuf) -> tokio::task::JoinHandle<()> {
    let listener = tokio::net::UnixListener::bind(&path).unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    })
}

/// Value of the exposition line for `family` carrying all `labels`, if present.
pub fn sample_value(body: &str, family: &str, labels: &[(&str, &str)]) -> Option<f64> {
    body.lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| {
            line.strip_prefix(family)
                .is_some_and(|rest| rest.starts_with('{') || rest.starts_with(' '))
        })
        .find(|line| {
            labels
                .iter()
                .all(|(k, v)| line.contains(&format!("{k}=\"{v}\"")))
        })
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|v| v.parse().ok())
}
