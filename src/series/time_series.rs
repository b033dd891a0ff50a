use std::mem::size_of;

use get_size::GetSize;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{DuplicatePolicy, IgnoreFilter, SampleAddResult, SeriesInfo, TimeSeriesOptions};
use crate::common::types::{Label, Sample, Timestamp};
use crate::config::Settings;
use crate::error::{TsdbError, TsdbResult};
use crate::series::utils::{get_sample_index, get_sample_index_bounds};

/// A single time series: an ordered run of samples together with the configuration
/// that governs how new samples are admitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[derive(GetSize)]
pub struct TimeSeries {
    pub labels: Vec<Label>,
    pub duplicate_policy: DuplicatePolicy,
    pub ignore_filter: Option<IgnoreFilter>,
    /// Samples sorted by timestamp, no two sharing a timestamp.
    pub(crate) samples: Vec<Sample>,
    /// Cached sample with the greatest timestamp. Rebuilt from `samples` on restore.
    #[serde(skip)]
    pub(crate) last_sample: Option<Sample>,
}

impl TimeSeries {
    /// Create a new empty time series.
    pub fn new() -> Self {
        TimeSeries::default()
    }

    pub fn with_options(options: TimeSeriesOptions, settings: &Settings) -> Self {
        let mut res = Self::new();
        res.duplicate_policy = options.duplicate_policy.unwrap_or(settings.duplicate_policy);
        res.ignore_filter = options.ignore_filter.or(settings.ignore_filter);
        res.labels = options.labels.unwrap_or_default();
        res
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first_timestamp(&self) -> Option<Timestamp> {
        self.samples.first().map(|s| s.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<Timestamp> {
        self.last_sample.map(|s| s.timestamp)
    }

    /// The most recently stored sample (greatest timestamp).
    pub fn last_sample(&self) -> Option<Sample> {
        self.last_sample
    }

    /// Offer a sample to the series.
    ///
    /// An exact timestamp collision is resolved by the duplicate policy in effect for this call
    /// (`dp_override` if given, else the series policy). Otherwise, when that policy is `LAST` and
    /// an ignore filter is configured, a sample close enough to the last stored sample is dropped.
    pub fn add(
        &mut self,
        ts: Timestamp,
        value: f64,
        dp_override: Option<DuplicatePolicy>,
    ) -> TsdbResult<SampleAddResult> {
        validate_sample(ts, value)?;
        let policy = DuplicatePolicy::effective(self.duplicate_policy, dp_override);
        let sample = Sample::new(ts, value);

        let (idx, found) = get_sample_index(&self.samples, ts);
        if found {
            return self.upsert_sample(idx, sample, policy);
        }

        if self.should_ignore(&sample, policy) {
            let last_ts = self.last_sample.map_or(ts, |s| s.timestamp);
            trace!(timestamp = ts, last_timestamp = last_ts, "sample ignored");
            return Ok(SampleAddResult::Ignored(last_ts));
        }

        self.insert_sample(idx, sample);
        Ok(SampleAddResult::Added(ts))
    }

    fn should_ignore(&self, sample: &Sample, policy: DuplicatePolicy) -> bool {
        if policy != DuplicatePolicy::KeepLast {
            return false;
        }
        match (&self.ignore_filter, &self.last_sample) {
            (Some(filter), Some(last)) => filter.should_ignore(last, sample),
            _ => false,
        }
    }

    fn upsert_sample(
        &mut self,
        idx: usize,
        sample: Sample,
        policy: DuplicatePolicy,
    ) -> TsdbResult<SampleAddResult> {
        let current = &mut self.samples[idx];
        current.value = policy.duplicate_value(sample.timestamp, current.value, sample.value)?;
        let current = *current;
        if idx == self.samples.len() - 1 {
            self.last_sample = Some(current);
        }
        debug!(timestamp = sample.timestamp, %policy, "duplicate sample resolved");
        Ok(SampleAddResult::Updated(sample.timestamp))
    }

    fn insert_sample(&mut self, idx: usize, sample: Sample) {
        if idx < self.samples.len() {
            self.samples.insert(idx, sample);
        } else {
            self.samples.push(sample);
            self.last_sample = Some(sample);
        }
    }

    /// Apply a configuration change in place. Stored samples are left untouched.
    pub fn alter(&mut self, options: TimeSeriesOptions) {
        if let Some(duplicate_policy) = options.duplicate_policy {
            self.duplicate_policy = duplicate_policy;
        }
        if let Some(filter) = options.ignore_filter {
            self.ignore_filter = Some(filter);
        }
        if let Some(labels) = options.labels {
            self.labels = labels;
        }
        debug!(
            duplicate_policy = %self.duplicate_policy,
            ignore = ?self.ignore_filter,
            "series altered"
        );
    }

    pub fn get_sample(&self, ts: Timestamp) -> Option<Sample> {
        match get_sample_index(&self.samples, ts) {
            (idx, true) => Some(self.samples[idx]),
            _ => None,
        }
    }

    /// Get the samples between given start and end time (both inclusive).
    pub fn get_range(&self, start_time: Timestamp, end_time: Timestamp) -> Vec<Sample> {
        match get_sample_index_bounds(&self.samples, start_time, end_time) {
            Some((start, end)) => self.samples[start..end].to_vec(),
            None => vec![],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.samples.iter().copied()
    }

    pub fn info(&self) -> SeriesInfo {
        SeriesInfo {
            total_samples: self.len(),
            first_timestamp: self.first_timestamp(),
            last_timestamp: self.last_timestamp(),
            duplicate_policy: self.duplicate_policy,
            ignore_max_time_diff: self.ignore_filter.map(|f| f.max_time_diff),
            ignore_max_val_diff: self.ignore_filter.map(|f| f.max_value_diff),
            labels: self.labels.clone(),
            last_sample: self.last_sample,
        }
    }

    pub fn memory_usage(&self) -> usize {
        size_of::<Self>() + self.get_heap_size()
    }

    /// Restore the invariants that are not part of the persisted form.
    pub(crate) fn update_meta(&mut self) -> TsdbResult<()> {
        let sorted = self.samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp);
        if !sorted {
            return Err(TsdbError::CannotDeserialize(
                "samples are not strictly increasing by timestamp".to_string(),
            ));
        }
        self.last_sample = self.samples.last().copied();
        Ok(())
    }
}

fn validate_sample(ts: Timestamp, value: f64) -> TsdbResult<()> {
    if ts < 0 {
        return Err(TsdbError::InvalidTimestamp(ts.to_string()));
    }
    if !value.is_finite() {
        return Err(TsdbError::InvalidValue(value.to_string()));
    }
    Ok(())
}
