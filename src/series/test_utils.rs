use crate::common::types::Sample;
use crate::series::{DuplicatePolicy, IgnoreFilter, TimeSeries};
use rand::{Rng, SeedableRng};

pub fn generate_random_samples(seed: u64, vec_size: usize) -> Vec<Sample> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut timestamp: i64 = rng.gen_range(1234567890..1357908642);
    let mut vec = Vec::with_capacity(vec_size);

    let mut value: f64 = if rng.gen_bool(0.5) {
        rng.gen_range(-100000000.0..1000000.0)
    } else {
        rng.gen_range(-10000.0..10000.0)
    };
    vec.push(Sample { timestamp, value });

    for _ in 1..vec_size {
        timestamp += rng.gen_range(1..30);
        if rng.gen_bool(0.33) {
            value += 1.0;
        } else if rng.gen_bool(0.33) {
            value = rng.gen();
        }
        vec.push(Sample { timestamp, value });
    }

    vec
}

/// A series with the given ignore thresholds and duplicate policy.
pub fn series_with_ignore(max_time_diff: u64, max_value_diff: f64, policy: DuplicatePolicy) -> TimeSeries {
    let mut ts = TimeSeries::new();
    ts.duplicate_policy = policy;
    ts.ignore_filter = Some(IgnoreFilter::new(max_time_diff, max_value_diff).unwrap());
    ts
}

/// Feed `samples` to `series`, returning the reported timestamps.
pub fn add_all(series: &mut TimeSeries, samples: &[(i64, f64)]) -> Vec<i64> {
    samples
        .iter()
        .map(|&(ts, value)| series.add(ts, value, None).unwrap().timestamp())
        .collect()
}
