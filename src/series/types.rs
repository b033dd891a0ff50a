use serde::{Deserialize, Serialize};

use crate::common::types::{Label, Sample, Timestamp};
use crate::series::{DuplicatePolicy, IgnoreFilter};

/// Configuration given at creation time (`TS.CREATE`, or `TS.ADD` on a missing key) and
/// at alteration time (`TS.ALTER`). Fields left as `None` are not touched by an alter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesOptions {
    pub duplicate_policy: Option<DuplicatePolicy>,
    pub ignore_filter: Option<IgnoreFilter>,
    pub labels: Option<Vec<Label>>,
}

impl TimeSeriesOptions {
    pub fn duplicate_policy(&mut self, duplicate_policy: DuplicatePolicy) {
        self.duplicate_policy = Some(duplicate_policy);
    }

    pub fn ignore_filter(&mut self, filter: IgnoreFilter) {
        self.ignore_filter = Some(filter);
    }

    pub fn labels(&mut self, labels: Vec<Label>) {
        self.labels = Some(labels);
    }
}

/// Outcome of offering one sample to a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleAddResult {
    /// The sample was stored as a new data point.
    Added(Timestamp),
    /// The sample collided with a stored timestamp and the duplicate policy was applied.
    Updated(Timestamp),
    /// The sample was dropped by the ignore filter. Holds the timestamp of the last stored sample.
    Ignored(Timestamp),
}

impl SampleAddResult {
    /// The timestamp reported back to the client.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            SampleAddResult::Added(ts)
            | SampleAddResult::Updated(ts)
            | SampleAddResult::Ignored(ts) => *ts,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, SampleAddResult::Ignored(_))
    }
}

/// Introspection view of a series (`TS.INFO`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInfo {
    pub total_samples: usize,
    pub first_timestamp: Option<Timestamp>,
    pub last_timestamp: Option<Timestamp>,
    pub duplicate_policy: DuplicatePolicy,
    pub ignore_max_time_diff: Option<u64>,
    pub ignore_max_val_diff: Option<f64>,
    pub labels: Vec<Label>,
    pub last_sample: Option<Sample>,
}
