// Bracket-indexed statistic names: `subnet[7].total-addresses`, `pool[0].assigned-addresses`.

use crate::error::{Result, StatsError};

/// Splits `prefix[N].rest` into `(N, "rest")`.
///
/// The index is the text between the first `[` and the first `]`, which must be
/// plain decimal digits fitting a `u64`. The residual starts after the `].`
/// separator and may itself carry another bracketed index. Nothing is trimmed
/// or case-folded.
pub fn parse_indexed_name(name: &str) -> Result<(u64, &str)> {
    let open = name.find('[').ok_or_else(|| malformed(name, "missing '['"))?;
    let close = name.find(']').ok_or_else(|| malformed(name, "missing ']'"))?;
    if close < open {
        return Err(malformed(name, "']' before '['"));
    }

    let digits = &name[open + 1..close];
    let index = if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<u64>().ok()
    } else {
        None
    };
    let index = index.ok_or_else(|| StatsError::InvalidIndex {
        name: name.to_string(),
        index: digits.to_string(),
    })?;

    let residual = name[close + 1..]
        .strip_prefix('.')
        .ok_or_else(|| malformed(name, "expected '.' after ']'"))?;
    Ok((index, residual))
}

fn malformed(name: &str, reason: &'static str) -> StatsError {
    StatsError::MalformedName {
        name: name.to_string(),
        reason,
    }
}
