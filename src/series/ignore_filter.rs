use get_size::GetSize;
use serde::{Deserialize, Serialize};

use crate::common::types::Sample;
use crate::error::{TsdbError, TsdbResult};
use crate::error_consts;

/// Thresholds under which a new sample is considered insignificant relative to the last
/// stored sample of a series, and therefore not stored.
///
/// Only consulted when the duplicate policy in effect for an ingestion is `LAST`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[derive(GetSize)]
pub struct IgnoreFilter {
    pub max_time_diff: u64,
    pub max_value_diff: f64,
}

impl IgnoreFilter {
    pub fn new(max_time_diff: u64, max_value_diff: f64) -> TsdbResult<Self> {
        if !max_value_diff.is_finite() || max_value_diff < 0.0 {
            return Err(TsdbError::invalid_args(error_consts::INVALID_IGNORE_MAX_VAL_DIFF));
        }
        Ok(Self {
            max_time_diff,
            max_value_diff,
        })
    }

    /// Parse the (maxTimeDiff, maxValDiff) pair. Both absent means no filter.
    pub fn parse(max_time_diff: Option<&str>, max_value_diff: Option<&str>) -> TsdbResult<Option<Self>> {
        match (max_time_diff, max_value_diff) {
            (None, None) => Ok(None),
            (Some(time_diff), Some(value_diff)) => {
                let max_time_diff = parse_max_time_diff(time_diff)?;
                let max_value_diff = parse_max_value_diff(value_diff)?;
                Self::new(max_time_diff, max_value_diff).map(Some)
            }
            _ => Err(TsdbError::invalid_args(error_consts::IGNORE_ARGS_TOGETHER)),
        }
    }

    /// Returns true if `sample` is within both thresholds of `last` (inclusive).
    pub fn should_ignore(&self, last: &Sample, sample: &Sample) -> bool {
        let time_diff = sample.timestamp.abs_diff(last.timestamp);
        if time_diff > self.max_time_diff {
            return false;
        }
        let value_diff = (sample.value - last.value).abs();
        value_diff <= self.max_value_diff
    }
}

fn parse_max_time_diff(arg: &str) -> TsdbResult<u64> {
    // u64 parsing rejects signs other than '+', fractions and garbage
    arg.parse::<u64>()
        .ok()
        .filter(|v| *v <= i64::MAX as u64)
        .ok_or_else(|| TsdbError::invalid_args(error_consts::INVALID_IGNORE_MAX_TIME_DIFF))
}

fn parse_max_value_diff(arg: &str) -> TsdbResult<f64> {
    match arg.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(TsdbError::invalid_args(error_consts::INVALID_IGNORE_MAX_VAL_DIFF)),
    }
}
