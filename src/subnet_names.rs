// Subnet id -> subnet name lookup, built from one `config-get` response.

use std::collections::HashMap;

use crate::error::{Result, StatsError};
use crate::models::RawKeaConfig;

/// Network type for DHCPv4, the only one Kea's v4 server reports.
pub const DHCP4: u8 = 4;

/// Label used when a subnet id has no configured name.
pub const UNKNOWN_SUBNET: &str = "unknown";

/// Outcome of a lookup. A missing id is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubnetName<'a> {
    Named(&'a str),
    Unknown,
}

impl<'a> SubnetName<'a> {
    pub fn label(&self) -> &'a str {
        match self {
            SubnetName::Named(name) => *name,
            SubnetName::Unknown => UNKNOWN_SUBNET,
        }
    }
}

/// Immutable for the life of one poll.
#[derive(Debug, Clone, Default)]
pub struct SubnetNames {
    v4: HashMap<u64, String>,
}

impl SubnetNames {
    /// Parse a `config-get` response and index its v4 subnets, including those
    /// declared inside shared networks.
    pub fn from_json(raw_json: &[u8]) -> Result<Self> {
        let config: RawKeaConfig = serde_json::from_slice(raw_json)?;
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &RawKeaConfig) -> Self {
        let dhcp4 = &config.arguments.dhcp4;
        let v4 = dhcp4
            .subnets
            .iter()
            .chain(dhcp4.shared_networks.iter().flat_map(|n| n.subnets.iter()))
            .map(|s| (s.id, s.subnet.clone()))
            .collect();
        Self { v4 }
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u64, S)>,
        S: Into<String>,
    {
        Self {
            v4: pairs.into_iter().map(|(id, s)| (id, s.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.v4.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty()
    }

    pub fn resolve(&self, network_type: u8, id: u64) -> Result<SubnetName<'_>> {
        match network_type {
            DHCP4 => Ok(self
                .v4
                .get(&id)
                .map_or(SubnetName::Unknown, |name| SubnetName::Named(name.as_str()))),
            other => Err(StatsError::UnsupportedNetworkType(other)),
        }
    }

    /// Label for exposition. Unconfigured ids degrade to [`UNKNOWN_SUBNET`] with a warning.
    pub fn resolve_label(&self, network_type: u8, id: u64) -> Result<&str> {
        let name = self.resolve(network_type, id)?;
        if name == SubnetName::Unknown {
            tracing::warn!(
                subnet_index = id,
                network_type,
                "subnet id has no entry in the Kea config"
            );
        }
        Ok(name.label())
    }
}
