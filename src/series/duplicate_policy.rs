use std::fmt::Display;
use std::str::FromStr;

use get_size::GetSize;
use serde::{Deserialize, Serialize};

use crate::common::types::Timestamp;
use crate::error::{TsdbError, TsdbResult};

#[derive(Debug, Default, Hash, PartialEq, Eq, Deserialize, Serialize, Clone, Copy)]
#[derive(GetSize)]
pub enum DuplicatePolicy {
    /// ignore any newly reported value and reply with an error
    #[default]
    Block,
    /// ignore any newly reported value
    KeepFirst,
    /// overwrite the existing value with the new value
    KeepLast,
    /// only override if the value is lower than the existing value
    Min,
    /// only override if the value is higher than the existing value
    Max,
    /// append the new value to the existing value
    Sum,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::Block => "block",
            DuplicatePolicy::KeepFirst => "first",
            DuplicatePolicy::KeepLast => "last",
            DuplicatePolicy::Min => "min",
            DuplicatePolicy::Max => "max",
            DuplicatePolicy::Sum => "sum",
        }
    }

    /// The policy applied to a single ingestion call. A per-request override wins over
    /// the series policy for that call only.
    #[inline]
    pub fn effective(series_policy: DuplicatePolicy, dp_override: Option<DuplicatePolicy>) -> DuplicatePolicy {
        dp_override.unwrap_or(series_policy)
    }

    /// Resolve a timestamp collision, returning the value to keep at `ts`.
    /// A non-finite result (e.g. an overflowing `SUM`) is rejected.
    pub fn duplicate_value(self, ts: Timestamp, old: f64, new: f64) -> TsdbResult<f64> {
        use DuplicatePolicy::*;
        let value = match self {
            Block => return Err(TsdbError::DuplicateSample(ts)),
            KeepFirst => old,
            KeepLast => new,
            Min => old.min(new),
            Max => old.max(new),
            Sum => old + new,
        };
        if !value.is_finite() {
            return Err(TsdbError::InvalidValue(value.to_string()));
        }
        Ok(value)
    }
}

impl Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = TsdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use DuplicatePolicy::*;
        match s {
            s if s.eq_ignore_ascii_case("block") => Ok(Block),
            s if s.eq_ignore_ascii_case("first") => Ok(KeepFirst),
            s if s.eq_ignore_ascii_case("last") => Ok(KeepLast),
            s if s.eq_ignore_ascii_case("min") => Ok(Min),
            s if s.eq_ignore_ascii_case("max") => Ok(Max),
            s if s.eq_ignore_ascii_case("sum") => Ok(Sum),
            _ => Err(TsdbError::InvalidDuplicatePolicy(s.to_string())),
        }
    }
}

impl TryFrom<&str> for DuplicatePolicy {
    type Error = TsdbError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
