// Exported metric families and which cooked field feeds each one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Counter,
    Gauge,
}

/// One exported series. `stat` is the Kea statistic name (or residual) it reads.
#[derive(Debug, Clone, Copy)]
pub struct Series {
    pub stat: &'static str,
    pub family: &'static str,
    pub kind: Kind,
    pub help: &'static str,
    /// Fixed `pkttype` label for the per-packet-type global families.
    pub pkttype: Option<&'static str>,
}

const fn series(stat: &'static str, family: &'static str, kind: Kind, help: &'static str) -> Series {
    Series {
        stat,
        family,
        kind,
        help,
        pkttype: None,
    }
}

const fn received(stat: &'static str, pkttype: &'static str) -> Series {
    Series {
        stat,
        family: "v4_packet_types_received_total",
        kind: Kind::Counter,
        help: "Number of v4 packets received",
        pkttype: Some(pkttype),
    }
}

const fn sent(stat: &'static str, pkttype: &'static str) -> Series {
    Series {
        stat,
        family: "v4_packet_types_sent_total",
        kind: Kind::Counter,
        help: "Number of v4 packets sent",
        pkttype: Some(pkttype),
    }
}

pub const SUBNET_LABELS: &[&str] = &["subnetidx", "subnet"];
pub const POOL_LABELS: &[&str] = &["subnetidx", "subnet", "poolidx"];

pub const GLOBAL_SERIES: &[Series] = &[
    series(
        "cumulative-assigned-addresses",
        "addresses_assigned_total",
        Kind::Counter,
        "Cumulative number of addresses that have been assigned since server startup",
    ),
    series(
        "declined-addresses",
        "addresses_declined_total",
        Kind::Gauge,
        "Number of IPv4 addresses that are currently declined; a count of the number of leases currently unavailable",
    ),
    series(
        "pkt4-received",
        "v4_packets_received_total",
        Kind::Counter,
        "Number of DHCPv4 packets received. This includes all packets: valid, bogus, corrupted, rejected, etc.",
    ),
    series(
        "pkt4-sent",
        "v4_packets_sent_total",
        Kind::Counter,
        "Number of DHCPv4 packets sent",
    ),
    received("pkt4-ack-received", "ack"),
    received("pkt4-decline-received", "decline"),
    received("pkt4-discover-received", "discover"),
    received("pkt4-inform-received", "inform"),
    received("pkt4-nak-received", "nak"),
    received("pkt4-offer-received", "offer"),
    received("pkt4-release-received", "release"),
    received("pkt4-request-received", "request"),
    received("pkt4-unknown-received", "unknown"),
    sent("pkt4-ack-sent", "ack"),
    sent("pkt4-nak-sent", "nak"),
    sent("pkt4-offer-sent", "offer"),
    series(
        "pkt4-parse-failed",
        "v4_packets_parse_failed_total",
        Kind::Counter,
        "Number of incoming packets that could not be parsed",
    ),
    series(
        "pkt4-receive-drop",
        "v4_packets_dropped_on_receive_total",
        Kind::Counter,
        "Number of incoming packets that were dropped",
    ),
    series(
        "v4-allocation-fail-classes",
        "v4_allocation_failures_classes_total",
        Kind::Counter,
        "Number of address allocation failures when the client's packet belongs to one or more classes",
    ),
    series(
        "v4-allocation-fail-no-pools",
        "v4_allocation_failures_no_pools_total",
        Kind::Counter,
        "Number of address allocation failures because the server could not use any configured pools for a particular client",
    ),
    series(
        "v4-allocation-fail",
        "v4_allocation_failures_total",
        Kind::Counter,
        "Number of total address allocation failures",
    ),
    series(
        "v4-allocation-fail-shared-network",
        "v4_allocation_failures_shared_network_total",
        Kind::Counter,
        "Number of address allocation failures for a particular client connected to a shared network",
    ),
    series(
        "v4-allocation-fail-subnet",
        "v4_allocation_failures_subnet_total",
        Kind::Counter,
        "Number of address allocation failures for a particular client connected to a subnet that does not belong to a shared network",
    ),
    series(
        "v4-reservation-conflicts",
        "v4_reservation_conflicts_total",
        Kind::Counter,
        "Number of host reservation allocation conflicts which have occurred across every subnet",
    ),
    series(
        "reclaimed-declined-addresses",
        "reclaimed_declined_addresses_total",
        Kind::Counter,
        "Number of IPv4 addresses that were declined, but have now been recovered",
    ),
    series(
        "reclaimed-leases",
        "reclaimed_leases_total",
        Kind::Counter,
        "Number of expired leases that have been reclaimed since server startup",
    ),
];

pub const SUBNET_SERIES: &[Series] = &[
    series(
        "assigned-addresses",
        "subnet_assigned_addresses",
        Kind::Gauge,
        "Number of assigned addresses in a given subnet",
    ),
    series(
        "cumulative-assigned-addresses",
        "subnet_assigned_addresses_total",
        Kind::Counter,
        "Cumulative number of assigned addresses in a given subnet",
    ),
    series(
        "declined-addresses",
        "subnet_declined_addresses_total",
        Kind::Gauge,
        "Number of IPv4 addresses that are currently declined in a given subnet; a count of the number of leases currently unavailable",
    ),
    series(
        "reclaimed-declined-addresses",
        "subnet_reclaimed_declined_addresses",
        Kind::Counter,
        "Number of IPv4 addresses that were declined, but have now been recovered",
    ),
    series(
        "reclaimed-leases",
        "subnet_reclaimed_leases_total",
        Kind::Counter,
        "Number of expired leases associated with a given subnet that have been reclaimed since server startup",
    ),
    series(
        "total-addresses",
        "subnet_addresses",
        Kind::Gauge,
        "Total number of addresses available for DHCPv4 management for a given subnet; in other words, this is the count of all addresses in all configured pools",
    ),
    series(
        "v4-reservation-conflicts",
        "subnet_reservation_conflicts_total",
        Kind::Counter,
        "Number of host reservation allocation conflicts which have occurred in a specific subnet",
    ),
];

pub const POOL_SERIES: &[Series] = &[
    series(
        "total-addresses",
        "subnet_pool_addresses",
        Kind::Gauge,
        "Total number of addresses available for DHCPv4 management for a given subnet pool",
    ),
    series(
        "cumulative-assigned-addresses",
        "subnet_pool_addresses_assigned_total",
        Kind::Counter,
        "Cumulative number of assigned addresses in a given subnet pool",
    ),
    series(
        "assigned-addresses",
        "subnet_pool_assigned_addresses",
        Kind::Gauge,
        "Number of assigned addresses in a given subnet pool",
    ),
    series(
        "reclaimed-leases",
        "subnet_pool_reclaimed_leases_total",
        Kind::Counter,
        "Number of expired leases associated with a given subnet pool that have been reclaimed since server startup",
    ),
    series(
        "declined-addresses",
        "subnet_pool_addresses_declined_total",
        Kind::Gauge,
        "Number of IPv4 addresses that are currently declined in a given subnet pool; a count of the number of leases currently unavailable",
    ),
    series(
        "reclaimed-declined-addresses",
        "subnet_pool_reclaimed_declined_addresses_total",
        Kind::Gauge,
        "Number of IPv4 addresses that were declined, but have now been recovered in this pool",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GlobalMetrics, PoolMetrics, SubnetMetrics};

    #[test]
    fn every_series_reads_a_recognized_statistic() {
        for s in GLOBAL_SERIES {
            assert!(GlobalMetrics::METRIC_NAMES.contains(&s.stat), "{}", s.stat);
        }
        for s in SUBNET_SERIES {
            assert!(SubnetMetrics::METRIC_NAMES.contains(&s.stat), "{}", s.stat);
        }
        for s in POOL_SERIES {
            assert!(PoolMetrics::METRIC_NAMES.contains(&s.stat), "{}", s.stat);
        }
    }

    #[test]
    fn every_recognized_statistic_is_exported() {
        assert_eq!(GLOBAL_SERIES.len(), GlobalMetrics::METRIC_NAMES.len());
        assert_eq!(SUBNET_SERIES.len(), SubnetMetrics::METRIC_NAMES.len());
        assert_eq!(POOL_SERIES.len(), PoolMetrics::METRIC_NAMES.len());
    }
}
