// Kea documents as received, and the metric model cooked from them

mod metrics;
mod raw;

pub use metrics::{CookedMetrics, GlobalMetrics, PoolMetrics, SubnetMetrics};
pub use raw::{
    Dhcp4Config, KeaConfigArguments, RawKeaConfig, RawStats, Sample, SharedNetworkConfig,
    SubnetConfig,
};
