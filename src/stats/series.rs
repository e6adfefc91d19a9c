// Reduce a statistic's sample history to the value Kea reported last.

use chrono::NaiveDateTime;

use crate::error::{Result, StatsError};
use crate::models::Sample;

/// Kea's sample timestamp layout, e.g. `2023-09-14 00:08:10.270215`. Fraction is optional.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

fn parse_timestamp(timestamp: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
}

/// Value of the sample with the latest timestamp.
///
/// Every timestamp must parse, even ones that cannot win. On equal timestamps
/// the sample encountered last in the series wins.
pub fn latest_value(metric: &str, series: &[Sample]) -> Result<f64> {
    let mut latest: Option<(NaiveDateTime, f64)> = None;
    for sample in series {
        let at = parse_timestamp(sample.timestamp()).map_err(|source| {
            StatsError::MalformedSample {
                metric: metric.to_string(),
                timestamp: sample.timestamp().to_string(),
                source,
            }
        })?;
        match latest {
            Some((best, _)) if at < best => {}
            _ => latest = Some((at, sample.value())),
        }
    }
    latest
        .map(|(_, value)| value)
        .ok_or_else(|| StatsError::EmptySeries {
            metric: metric.to_string(),
        })
}
