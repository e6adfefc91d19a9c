// Cooked metric model: global counters, per-subnet and per-pool scalars.
// Every poll builds a fresh CookedMetrics; nothing here outlives one scrape.

use std::collections::BTreeMap;

/// Binds Kea statistic names to scalar fields, so routing a value is a table lookup.
macro_rules! metric_fields {
    ($ty:ident { $($key:literal => $field:ident),+ $(,)? }) => {
        impl $ty {
            /// Kea statistic names this aggregate recognizes.
            pub const METRIC_NAMES: &'static [&'static str] = &[$($key),+];

            /// Mutable slot for a recognized statistic name; `None` for anything else.
            pub fn metric_mut(&mut self, name: &str) -> Option<&mut f64> {
                match name {
                    $($key => Some(&mut self.$field),)+
                    _ => None,
                }
            }

            pub fn metric(&self, name: &str) -> Option<f64> {
                match name {
                    $($key => Some(self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

/// Server-wide counters. Anything Kea did not report stays at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalMetrics {
    pub cumulative_assigned_addresses: f64,
    pub declined_addresses: f64,
    pub pkt4_ack_received: f64,
    pub pkt4_ack_sent: f64,
    pub pkt4_decline_received: f64,
    pub pkt4_discover_received: f64,
    pub pkt4_inform_received: f64,
    pub pkt4_nak_received: f64,
    pub pkt4_nak_sent: f64,
    pub pkt4_offer_received: f64,
    pub pkt4_offer_sent: f64,
    pub pkt4_parse_failed: f64,
    pub pkt4_receive_drop: f64,
    pub pkt4_received: f64,
    pub pkt4_release_received: f64,
    pub pkt4_request_received: f64,
    pub pkt4_sent: f64,
    pub pkt4_unknown_received: f64,
    pub reclaimed_declined_addresses: f64,
    pub reclaimed_leases: f64,
    pub v4_allocation_fail: f64,
    pub v4_allocation_fail_classes: f64,
    pub v4_allocation_fail_no_pools: f64,
    pub v4_allocation_fail_shared_network: f64,
    pub v4_allocation_fail_subnet: f64,
    pub v4_reservation_conflicts: f64,
}

metric_fields!(GlobalMetrics {
    "cumulative-assigned-addresses" => cumulative_assigned_addresses,
    "declined-addresses" => declined_addresses,
    "pkt4-ack-received" => pkt4_ack_received,
    "pkt4-ack-sent" => pkt4_ack_sent,
    "pkt4-decline-received" => pkt4_decline_received,
    "pkt4-discover-received" => pkt4_discover_received,
    "pkt4-inform-received" => pkt4_inform_received,
    "pkt4-nak-received" => pkt4_nak_received,
    "pkt4-nak-sent" => pkt4_nak_sent,
    "pkt4-offer-received" => pkt4_offer_received,
    "pkt4-offer-sent" => pkt4_offer_sent,
    "pkt4-parse-failed" => pkt4_parse_failed,
    "pkt4-receive-drop" => pkt4_receive_drop,
    "pkt4-received" => pkt4_received,
    "pkt4-release-received" => pkt4_release_received,
    "pkt4-request-received" => pkt4_request_received,
    "pkt4-sent" => pkt4_sent,
    "pkt4-unknown-received" => pkt4_unknown_received,
    "reclaimed-declined-addresses" => reclaimed_declined_addresses,
    "reclaimed-leases" => reclaimed_leases,
    "v4-allocation-fail" => v4_allocation_fail,
    "v4-allocation-fail-classes" => v4_allocation_fail_classes,
    "v4-allocation-fail-no-pools" => v4_allocation_fail_no_pools,
    "v4-allocation-fail-shared-network" => v4_allocation_fail_shared_network,
    "v4-allocation-fail-subnet" => v4_allocation_fail_subnet,
    "v4-reservation-conflicts" => v4_reservation_conflicts,
});

/// Scalars reported under `subnet[N].<name>`, plus the pools of that subnet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubnetMetrics {
    pub index: u64,
    pub assigned_addresses: f64,
    pub cumulative_assigned_addresses: f64,
    pub declined_addresses: f64,
    pub reclaimed_declined_addresses: f64,
    pub reclaimed_leases: f64,
    pub total_addresses: f64,
    pub v4_reservation_conflicts: f64,
    pub pools: BTreeMap<u64, PoolMetrics>,
}

metric_fields!(SubnetMetrics {
    "assigned-addresses" => assigned_addresses,
    "cumulative-assigned-addresses" => cumulative_assigned_addresses,
    "declined-addresses" => declined_addresses,
    "reclaimed-declined-addresses" => reclaimed_declined_addresses,
    "reclaimed-leases" => reclaimed_leases,
    "total-addresses" => total_addresses,
    "v4-reservation-conflicts" => v4_reservation_conflicts,
});

impl SubnetMetrics {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Pool `index` of this subnet, created empty on first use and reused afterwards.
    pub fn pool_mut(&mut self, index: u64) -> &mut PoolMetrics {
        self.pools
            .entry(index)
            .or_insert_with(|| PoolMetrics::new(index))
    }
}

/// Scalars reported under `subnet[N].pool[M].<name>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolMetrics {
    pub index: u64,
    pub total_addresses: f64,
    pub cumulative_assigned_addresses: f64,
    pub assigned_addresses: f64,
    pub reclaimed_leases: f64,
    pub declined_addresses: f64,
    pub reclaimed_declined_addresses: f64,
}

metric_fields!(PoolMetrics {
    "total-addresses" => total_addresses,
    "cumulative-assigned-addresses" => cumulative_assigned_addresses,
    "assigned-addresses" => assigned_addresses,
    "reclaimed-leases" => reclaimed_leases,
    "declined-addresses" => declined_addresses,
    "reclaimed-declined-addresses" => reclaimed_declined_addresses,
});

impl PoolMetrics {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }
}

/// Everything one `statistic-get-all` snapshot says, keyed by subnet index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookedMetrics {
    pub global: GlobalMetrics,
    pub subnets: BTreeMap<u64, SubnetMetrics>,
}

impl CookedMetrics {
    /// Subnet `index`, created empty on first use and reused afterwards.
    pub fn subnet_mut(&mut self, index: u64) -> &mut SubnetMetrics {
        self.subnets
            .entry(index)
            .or_insert_with(|| SubnetMetrics::new(index))
    }

    /// Number of pools across all subnets.
    pub fn pool_count(&self) -> usize {
        self.subnets.values().map(|s| s.pools.len()).sum()
    }
}
