use crate::common::types::{Sample, Timestamp};

/// Returns the position of `ts` in `samples`, and whether a sample with that timestamp exists.
/// If not found, the position is where a sample with `ts` would be inserted.
/// Assumes that `samples` is sorted.
pub(crate) fn get_sample_index(samples: &[Sample], ts: Timestamp) -> (usize, bool) {
    match samples.binary_search_by(|x| x.timestamp.cmp(&ts)) {
        Ok(pos) => (pos, true),
        Err(idx) => (idx, false),
    }
}

/// Finds the half-open index range `[start, end)` of the samples whose timestamps fall
/// within `start_ts..=end_ts`. Returns `None` if no sample is in range.
pub(crate) fn get_sample_index_bounds(
    samples: &[Sample],
    start_ts: Timestamp,
    end_ts: Timestamp,
) -> Option<(usize, usize)> {
    if samples.is_empty() || start_ts > end_ts {
        return None;
    }
    let start_idx = samples.partition_point(|s| s.timestamp < start_ts);
    let end_idx = samples.partition_point(|s| s.timestamp <= end_ts);
    if start_idx >= end_idx {
        return None;
    }
    Some((start_idx, end_idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(stamps: &[Timestamp]) -> Vec<Sample> {
        stamps.iter().map(|&ts| Sample::new(ts, ts as f64)).collect()
    }

    #[test]
    fn get_sample_index_empty() {
        let samples: Vec<Sample> = vec![];
        assert_eq!(get_sample_index(&samples, 0), (0, false));
        assert_eq!(get_sample_index(&samples, 100), (0, false));
    }

    #[test]
    fn get_sample_index_found() {
        let samples = samples(&[1, 2, 3, 4, 5]);
        assert_eq!(get_sample_index(&samples, 1), (0, true));
        assert_eq!(get_sample_index(&samples, 5), (4, true));
    }

    #[test]
    fn get_sample_index_not_found() {
        let samples = samples(&[1, 2, 3, 4, 5, 10]);
        assert_eq!(get_sample_index(&samples, 0), (0, false));
        assert_eq!(get_sample_index(&samples, 6), (5, false));
        assert_eq!(get_sample_index(&samples, 100), (6, false));
    }

    #[test]
    fn get_sample_index_bounds_within_range() {
        let samples = samples(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(get_sample_index_bounds(&samples, 3, 8), Some((2, 8)));
        assert_eq!(get_sample_index_bounds(&samples, 0, 20), Some((0, 10)));
        assert_eq!(get_sample_index_bounds(&samples, 3, 3), Some((2, 3)));
    }

    #[test]
    fn get_sample_index_bounds_out_of_range() {
        let samples = samples(&[1, 2, 3, 4, 5]);
        assert_eq!(get_sample_index_bounds(&samples, 10, 20), None);
        assert_eq!(get_sample_index_bounds(&samples, 8, 2), None);
        assert_eq!(get_sample_index_bounds(&[], 0, 2), None);
    }
}
