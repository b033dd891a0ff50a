use std::cmp::Ordering;

use get_size::GetSize;
use serde::{Deserialize, Serialize};

pub type Timestamp = i64;

/// Represents a data point in time series.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[derive(GetSize)]
pub struct Sample {
    /// Timestamp from epoch.
    pub timestamp: Timestamp,

    /// Value for this data point.
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: Timestamp, value: f64) -> Self {
        Sample { timestamp, value }
    }
}

impl PartialEq for Sample {
    #[inline]
    fn eq(&self, other: &Sample) -> bool {
        // Two data points are equal if their times are equal, and their values are either equal or are NaN.
        if self.timestamp == other.timestamp {
            if self.value.is_nan() {
                return other.value.is_nan();
            }
            return self.value == other.value;
        }
        false
    }
}

impl Eq for Sample {}

impl Ord for Sample {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[derive(GetSize)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new<S: Into<String>>(name: S, value: S) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
