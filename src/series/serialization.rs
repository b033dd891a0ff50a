use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{TsdbError, TsdbResult};
use crate::series::{IgnoreFilter, TimeSeries};

/// Version of the persisted series layout. Bump when `TimeSeries` changes shape.
pub const SERIES_ENCODING_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    series: &'a TimeSeries,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    series: TimeSeries,
}

impl TimeSeries {
    /// Encode the series (configuration and samples) for DUMP and RDB persistence.
    pub fn to_snapshot(&self) -> TsdbResult<String> {
        // JSON has no encoding for non-finite floats
        if let Some(sample) = self.samples.iter().find(|s| !s.value.is_finite()) {
            let msg = format!("non-finite value at timestamp {}", sample.timestamp);
            return Err(TsdbError::CannotSerialize(msg));
        }
        let snapshot = SnapshotRef {
            version: SERIES_ENCODING_VERSION,
            series: self,
        };
        serde_json::to_string(&snapshot).map_err(|e| TsdbError::CannotSerialize(e.to_string()))
    }

    /// Rebuild a series from [`TimeSeries::to_snapshot`] output.
    pub fn from_snapshot(data: &str) -> TsdbResult<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(data).map_err(|e| TsdbError::CannotDeserialize(e.to_string()))?;

        if snapshot.version > SERIES_ENCODING_VERSION {
            warn!(version = snapshot.version, "series snapshot written by a newer version");
            let msg = format!(
                "unsupported encoding version {} (max {SERIES_ENCODING_VERSION})",
                snapshot.version
            );
            return Err(TsdbError::CannotDeserialize(msg));
        }

        let mut series = snapshot.series;
        if let Some(filter) = series.ignore_filter {
            // thresholds must satisfy the same constraints as on create
            series.ignore_filter = Some(IgnoreFilter::new(
                filter.max_time_diff,
                filter.max_value_diff,
            )?);
        }
        series.update_meta()?;
        debug!(samples = series.len(), "series restored from snapshot");
        Ok(series)
    }
}
