// Errors raised while turning a Kea stats snapshot into cooked metrics.

/// Structural failures in a stats or config document. Any of these aborts the poll.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// Bracket syntax is absent or broken, e.g. `subnet3.foo` or `subnet[1]foo`.
    #[error("malformed metric name '{name}': {reason}")]
    MalformedName { name: String, reason: &'static str },

    /// The text between the brackets is not an unsigned 64-bit integer.
    #[error("invalid index '{index}' in metric name '{name}'")]
    InvalidIndex { name: String, index: String },

    /// A metric carried no samples at all.
    #[error("metric '{metric}' has an empty sample series")]
    EmptySeries { metric: String },

    /// A sample timestamp could not be parsed.
    #[error("metric '{metric}' has a malformed sample timestamp '{timestamp}': {source}")]
    MalformedSample {
        metric: String,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Name resolution was asked for a network type other than DHCPv4.
    #[error("unsupported network type {0}, want 4")]
    UnsupportedNetworkType(u8),

    /// The document is not the JSON shape Kea answers with.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
