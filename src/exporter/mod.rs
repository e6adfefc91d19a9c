// Prometheus exposition: one scrape runs one full poll of Kea.

mod descriptors;

pub use descriptors::{
    GLOBAL_SERIES, Kind, POOL_LABELS, POOL_SERIES, SUBNET_LABELS, SUBNET_SERIES, Series,
};

use crate::kea_repo::KeaRepo;
use crate::models::CookedMetrics;
use crate::stats;
use crate::subnet_names::{DHCP4, SubnetNames};
use anyhow::Context;
use prometheus::{CounterVec, Encoder, GaugeVec, Opts, Registry, TextEncoder};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Content type of the text exposition format.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub struct KeaCollector {
    repo: KeaRepo,
    namespace: String,
}

impl KeaCollector {
    pub fn new(repo: KeaRepo, namespace: impl Into<String>) -> Self {
        Self {
            repo,
            namespace: namespace.into(),
        }
    }

    /// Fetch stats, cook them, fetch config, name the subnets, render.
    /// Any failing step aborts the scrape; no partial metric set is produced.
    #[instrument(skip(self), fields(operation = "scrape"))]
    pub async fn scrape(&self) -> anyhow::Result<String> {
        debug!("Fetching stats from Kea");
        let raw_stats = self.repo.fetch_stats().await?;
        let cooked = stats::parse_stats(&raw_stats).context("could not parse raw JSON stats")?;
        let raw_config = self.repo.fetch_config().await?;
        let names = SubnetNames::from_json(&raw_config).context("could not parse Kea config")?;
        debug!(configured_subnets = names.len(), "Kea config parsed");
        render(&self.namespace, &cooked, &names)
    }
}

/// Encode cooked metrics in the Prometheus text format, using a registry private to this call.
pub fn render(
    namespace: &str,
    cooked: &CookedMetrics,
    names: &SubnetNames,
) -> anyhow::Result<String> {
    let mut families = Families::new(namespace);

    for s in GLOBAL_SERIES {
        let labels: &[&str] = if s.pkttype.is_some() { &["pkttype"] } else { &[] };
        let family = families.get(s, labels)?;
        let value = cooked.global.metric(s.stat).unwrap_or_default();
        match s.pkttype {
            Some(pkttype) => family.set(&[pkttype], value)?,
            None => family.set(&[], value)?,
        }
    }

    for subnet in cooked.subnets.values() {
        let subnet_idx = subnet.index.to_string();
        let subnet_name = names.resolve_label(DHCP4, subnet.index)?;
        for s in SUBNET_SERIES {
            let value = subnet.metric(s.stat).unwrap_or_default();
            families
                .get(s, SUBNET_LABELS)?
                .set(&[subnet_idx.as_str(), subnet_name], value)?;
        }
        for pool in subnet.pools.values() {
            let pool_idx = pool.index.to_string();
            for s in POOL_SERIES {
                let value = pool.metric(s.stat).unwrap_or_default();
                families
                    .get(s, POOL_LABELS)?
                    .set(&[subnet_idx.as_str(), subnet_name, pool_idx.as_str()], value)?;
            }
        }
    }

    families.encode()
}

enum Family {
    Counter(CounterVec),
    Gauge(GaugeVec),
}

impl Family {
    fn set(&self, labels: &[&str], value: f64) -> prometheus::Result<()> {
        match self {
            // Kea counters only grow; a fresh counter starts at zero, so add the whole value.
            Family::Counter(c) => c
                .get_metric_with_label_values(labels)?
                .inc_by(value.max(0.0)),
            Family::Gauge(g) => g.get_metric_with_label_values(labels)?.set(value),
        }
        Ok(())
    }
}

struct Families {
    namespace: String,
    registry: Registry,
    by_name: HashMap<&'static str, Family>,
}

impl Families {
    fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            registry: Registry::new(),
            by_name: HashMap::new(),
        }
    }

    /// Family for `series`, registered on first use. Series sharing a family name share it.
    fn get(&mut self, series: &Series, labels: &[&str]) -> anyhow::Result<&Family> {
        if !self.by_name.contains_key(series.family) {
            let opts = Opts::new(series.family, series.help).namespace(self.namespace.clone());
            let family = match series.kind {
                Kind::Counter => {
                    let vec = CounterVec::new(opts, labels)?;
                    self.registry.register(Box::new(vec.clone()))?;
                    Family::Counter(vec)
                }
                Kind::Gauge => {
                    let vec = GaugeVec::new(opts, labels)?;
                    self.registry.register(Box::new(vec.clone()))?;
                    Family::Gauge(vec)
                }
            };
            self.by_name.insert(series.family, family);
        }
        self.by_name
            .get(series.family)
            .with_context(|| format!("metric family {} not registered", series.family))
    }

    fn encode(&self) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}
