// Wire shapes of the `statistic-get-all` and `config-get` responses.

use serde::Deserialize;
use std::collections::HashMap;

/// One `[value, "YYYY-MM-DD HH:MM:SS[.ffffff]"]` pair of a statistic's history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample(pub f64, pub String);

impl Sample {
    pub fn new(value: f64, timestamp: impl Into<String>) -> Self {
        Self(value, timestamp.into())
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn timestamp(&self) -> &str {
        &self.1
    }
}

/// Response to `statistic-get-all`: metric name -> sample history.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStats {
    #[serde(default)]
    pub result: i64,
    pub arguments: HashMap<String, Vec<Sample>>,
}

impl RawStats {
    pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}

/// Response to `config-get`. Only the parts needed to name subnets are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct RawKeaConfig {
    pub arguments: KeaConfigArguments,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeaConfigArguments {
    #[serde(rename = "Dhcp4")]
    pub dhcp4: Dhcp4Config,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dhcp4Config {
    #[serde(default, rename = "subnet4")]
    pub subnets: Vec<SubnetConfig>,
    #[serde(default, rename = "shared-networks")]
    pub shared_networks: Vec<SharedNetworkConfig>,
}

/// Subnets declared inside a shared network are not listed in the top-level `subnet4`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SharedNetworkConfig {
    #[serde(default, rename = "subnet4")]
    pub subnets: Vec<SubnetConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubnetConfig {
    pub id: u64,
    pub subnet: String,
}
