// Turn a raw `statistic-get-all` snapshot into the global/subnet/pool metric model.

mod name;
mod series;

pub use name::parse_indexed_name;
pub use series::latest_value;

use crate::error::{Result, StatsError};
use crate::models::{CookedMetrics, RawStats, Sample};
use tracing::{debug, trace};

/// Decode a stats response and cook it. Exposed for the exporter and tests.
pub fn parse_stats(raw_json: &[u8]) -> Result<CookedMetrics> {
    let raw = RawStats::from_json(raw_json)?;
    let cooked = classify(
        raw.arguments
            .iter()
            .map(|(name, series)| (name.as_str(), series.as_slice())),
    )?;
    debug!(
        statistics = raw.arguments.len(),
        subnets = cooked.subnets.len(),
        pools = cooked.pool_count(),
        "stats snapshot classified"
    );
    Ok(cooked)
}

/// Route every `(name, series)` entry into a fresh aggregate.
///
/// Entries are independent, so their order does not matter. The first error
/// aborts the whole classification and nothing partial is returned.
pub fn classify<'a, I>(entries: I) -> Result<CookedMetrics>
where
    I: IntoIterator<Item = (&'a str, &'a [Sample])>,
{
    let mut cooked = CookedMetrics::default();
    for (name, series) in entries {
        let value = latest_value(name, series)?;
        route(&mut cooked, name, value)?;
    }
    Ok(cooked)
}

fn route(cooked: &mut CookedMetrics, name: &str, value: f64) -> Result<()> {
    if !name.starts_with("subnet[") {
        if lacks_brackets(name, "subnet") {
            return Err(missing_brackets(name));
        }
        store(cooked.global.metric_mut(name), name, value);
        return Ok(());
    }

    let (subnet_index, residual) = parse_indexed_name(name)?;
    let subnet = cooked.subnet_mut(subnet_index);
    if residual.starts_with("pool[") {
        let (pool_index, residual) = parse_indexed_name(residual)?;
        let pool = subnet.pool_mut(pool_index);
        store(pool.metric_mut(residual), name, value);
    } else if lacks_brackets(residual, "pool") {
        return Err(missing_brackets(name));
    } else {
        store(subnet.metric_mut(residual), name, value);
    }
    Ok(())
}

fn store(slot: Option<&mut f64>, name: &str, value: f64) {
    match slot {
        Some(slot) => *slot = value,
        None => trace!(metric = name, "ignoring unrecognized statistic"),
    }
}

/// `subnet3.foo` or `pool0.foo`: an index written without its brackets.
/// Other names sharing the prefix, such as `subnets-total`, are not indexed.
fn lacks_brackets(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.bytes().next())
        .is_some_and(|b| b.is_ascii_digit())
}

fn missing_brackets(name: &str) -> StatsError {
    StatsError::MalformedName {
        name: name.to_string(),
        reason: "index is missing its brackets",
    }
}
