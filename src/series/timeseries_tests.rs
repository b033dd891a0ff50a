#[cfg(test)]
mod tests {
    use crate::common::types::Sample;
    use crate::error::TsdbError;
    use crate::series::test_utils::{add_all, series_with_ignore};
    use crate::series::{DuplicatePolicy, IgnoreFilter, SampleAddResult, TimeSeries, TimeSeriesOptions};
    use test_case::test_case;

    fn stored(ts: &TimeSeries) -> Vec<(i64, f64)> {
        ts.iter().map(|s| (s.timestamp, s.value)).collect()
    }

    #[test]
    fn test_ignore_with_last_policy() {
        let mut ts = series_with_ignore(5, 5.0, DuplicatePolicy::KeepLast);

        assert_eq!(ts.add(1000, 1.0, None), Ok(SampleAddResult::Added(1000)));
        assert_eq!(ts.add(1001, 2.0, None), Ok(SampleAddResult::Ignored(1000)));
        // time delta 6 > 5
        assert_eq!(ts.add(1006, 3.0, None), Ok(SampleAddResult::Added(1006)));
        // time delta 1, value delta 5: both within (inclusive) thresholds
        assert_eq!(ts.add(1007, 8.0, None), Ok(SampleAddResult::Ignored(1006)));
        // value delta 7 > 5
        assert_eq!(ts.add(1008, 10.0, None), Ok(SampleAddResult::Added(1008)));
        assert_eq!(ts.add(1009, 15.0001, None), Ok(SampleAddResult::Added(1009)));

        assert_eq!(stored(&ts), vec![(1000, 1.0), (1006, 3.0), (1008, 10.0), (1009, 15.0001)]);
    }

    #[test]
    fn test_ignore_large_values() {
        let mut ts = series_with_ignore(5, 5.0, DuplicatePolicy::KeepLast);
        let reported = add_all(
            &mut ts,
            &[
                (1000, 1.0),
                (1001, 2.0),
                (1006, 3.0),
                (1007, 8.0),
                (1008, 10.0),
                (1009, 21001.0000002),
                (1010, 21003.0),
                (1020, 22000.0),
                (1022, 21998.0),
                (1023, 21994.0),
            ],
        );
        assert_eq!(reported, vec![1000, 1000, 1006, 1006, 1008, 1009, 1009, 1020, 1020, 1023]);
        assert_eq!(
            stored(&ts),
            vec![
                (1000, 1.0),
                (1006, 3.0),
                (1008, 10.0),
                (1009, 21001.0000002),
                (1020, 22000.0),
                (1023, 21994.0)
            ]
        );
    }

    #[test]
    fn test_first_sample_never_ignored() {
        let mut ts = series_with_ignore(u64::MAX >> 1, f64::MAX, DuplicatePolicy::KeepLast);
        assert_eq!(ts.add(5, 1.0, None), Ok(SampleAddResult::Added(5)));
        assert_eq!(ts.add(6, 1.0, None), Ok(SampleAddResult::Ignored(5)));
    }

    #[test]
    fn test_ignored_sample_is_idempotent() {
        let mut ts = series_with_ignore(5, 5.0, DuplicatePolicy::KeepLast);
        ts.add(1000, 1.0, None).unwrap();
        for _ in 0..3 {
            assert_eq!(ts.add(1003, 4.0, None), Ok(SampleAddResult::Ignored(1000)));
        }
        assert_eq!(ts.last_sample(), Some(Sample::new(1000, 1.0)));
        assert_eq!(ts.len(), 1);
    }

    #[test]
    fn test_exact_thresholds_are_ignored() {
        let mut ts = series_with_ignore(10, 2.5, DuplicatePolicy::KeepLast);
        ts.add(100, 1.0, None).unwrap();
        assert_eq!(ts.add(110, 3.5, None), Ok(SampleAddResult::Ignored(100)));
        assert_eq!(ts.add(111, 3.5, None), Ok(SampleAddResult::Added(111)));
    }

    #[test_case(DuplicatePolicy::Block)]
    #[test_case(DuplicatePolicy::KeepFirst)]
    #[test_case(DuplicatePolicy::Min)]
    #[test_case(DuplicatePolicy::Max)]
    #[test_case(DuplicatePolicy::Sum)]
    fn test_filter_inactive_without_last_policy(policy: DuplicatePolicy) {
        let mut ts = series_with_ignore(5, 5.0, policy);
        let samples = [(1000, 1.0), (1001, 2.0), (1006, 3.0), (1007, 8.0), (1008, 10.0), (1009, 15.0001)];
        let reported = add_all(&mut ts, &samples);
        assert_eq!(reported, vec![1000, 1001, 1006, 1007, 1008, 1009]);
        assert_eq!(stored(&ts), samples.to_vec());
    }

    #[test]
    fn test_override_to_last_activates_filter_for_one_call() {
        let mut ts = series_with_ignore(5, 5.0, DuplicatePolicy::Block);
        add_all(&mut ts, &[(1000, 1.0), (1009, 15.0001)]);

        let res = ts.add(1010, 16.0, Some(DuplicatePolicy::KeepLast));
        assert_eq!(res, Ok(SampleAddResult::Ignored(1009)));
        assert_eq!(ts.duplicate_policy, DuplicatePolicy::Block);

        // without the override the same sample is stored
        assert_eq!(ts.add(1010, 16.0, None), Ok(SampleAddResult::Added(1010)));
    }

    #[test]
    fn test_override_away_from_last_suppresses_filter() {
        let mut ts = series_with_ignore(5, 5.0, DuplicatePolicy::KeepLast);
        ts.add(1000, 1.0, None).unwrap();
        let res = ts.add(1001, 1.5, Some(DuplicatePolicy::Sum));
        assert_eq!(res, Ok(SampleAddResult::Added(1001)));
        assert_eq!(ts.duplicate_policy, DuplicatePolicy::KeepLast);
    }

    #[test]
    fn test_filter_not_consulted_on_timestamp_collision() {
        let mut ts = series_with_ignore(5, 5.0, DuplicatePolicy::KeepLast);
        ts.add(1000, 1.0, None).unwrap();
        assert_eq!(ts.add(1000, 2.0, None), Ok(SampleAddResult::Updated(1000)));
        assert_eq!(ts.last_sample(), Some(Sample::new(1000, 2.0)));
        assert_eq!(ts.len(), 1);
    }

    #[test]
    fn test_collision_resolution_updates_last_sample() {
        let mut ts = TimeSeries::new();
        ts.duplicate_policy = DuplicatePolicy::Sum;
        add_all(&mut ts, &[(100, 1.0), (200, 2.0)]);

        assert_eq!(ts.add(200, 3.0, None), Ok(SampleAddResult::Updated(200)));
        assert_eq!(ts.last_sample(), Some(Sample::new(200, 5.0)));

        // collision on an older sample leaves the cached last sample alone
        assert_eq!(ts.add(100, 3.0, Some(DuplicatePolicy::Max)), Ok(SampleAddResult::Updated(100)));
        assert_eq!(ts.get_sample(100), Some(Sample::new(100, 3.0)));
        assert_eq!(ts.last_sample(), Some(Sample::new(200, 5.0)));
    }

    #[test]
    fn test_block_policy_rejects_collision() {
        let mut ts = TimeSeries::new();
        ts.add(100, 1.0, None).unwrap();
        assert_eq!(ts.add(100, 2.0, None), Err(TsdbError::DuplicateSample(100)));
        assert_eq!(ts.get_sample(100), Some(Sample::new(100, 1.0)));

        assert_eq!(
            ts.add(100, 2.0, Some(DuplicatePolicy::KeepLast)),
            Ok(SampleAddResult::Updated(100))
        );
        assert_eq!(ts.get_sample(100), Some(Sample::new(100, 2.0)));
    }

    #[test]
    fn test_out_of_order_sample_keeps_last_sample() {
        let mut ts = TimeSeries::new();
        add_all(&mut ts, &[(100, 1.0), (300, 3.0)]);
        assert_eq!(ts.add(200, 2.0, None), Ok(SampleAddResult::Added(200)));
        assert_eq!(ts.last_sample(), Some(Sample::new(300, 3.0)));
        let stamps: Vec<_> = ts.iter().map(|s| s.timestamp).collect();
        assert_eq!(stamps, vec![100, 200, 300]);
    }

    #[test]
    fn test_alter_thresholds_apply_to_later_samples_only() {
        let mut ts = series_with_ignore(3, 5.0, DuplicatePolicy::KeepLast);
        add_all(
            &mut ts,
            &[(1000, 1.0), (1001, 2.0), (1004, 3.0), (1005, 8.0), (1006, 10.0), (1007, 15.0001)],
        );
        assert_eq!(ts.add(1010, 19.0, None), Ok(SampleAddResult::Ignored(1007)));
        let before = stored(&ts);
        assert_eq!(before, vec![(1000, 1.0), (1004, 3.0), (1006, 10.0), (1007, 15.0001)]);

        ts.alter(TimeSeriesOptions {
            ignore_filter: Some(IgnoreFilter::new(2, 4.0).unwrap()),
            ..Default::default()
        });
        assert_eq!(stored(&ts), before);
        assert_eq!(ts.info().ignore_max_time_diff, Some(2));
        assert_eq!(ts.info().ignore_max_val_diff, Some(4.0));

        assert_eq!(ts.add(1010, 19.0, None), Ok(SampleAddResult::Added(1010)));
    }

    #[test]
    fn test_alter_policy_toggles_filter() {
        let mut ts = series_with_ignore(5, 5.0, DuplicatePolicy::Block);
        ts.add(1000, 1.0, None).unwrap();
        assert_eq!(ts.add(1001, 1.0, None), Ok(SampleAddResult::Added(1001)));

        let mut options = TimeSeriesOptions::default();
        options.duplicate_policy(DuplicatePolicy::KeepLast);
        ts.alter(options);

        assert_eq!(ts.ignore_filter, Some(IgnoreFilter::new(5, 5.0).unwrap()));
        assert_eq!(ts.add(1002, 1.0, None), Ok(SampleAddResult::Ignored(1001)));
    }

    #[test]
    fn test_info_reports_configuration() {
        let mut ts = series_with_ignore(3, 5.0, DuplicatePolicy::KeepLast);
        ts.add(10, 1.0, None).unwrap();
        ts.add(20, 10.0, None).unwrap();

        let info = ts.info();
        assert_eq!(info.total_samples, 2);
        assert_eq!(info.first_timestamp, Some(10));
        assert_eq!(info.last_timestamp, Some(20));
        assert_eq!(info.duplicate_policy, DuplicatePolicy::KeepLast);
        assert_eq!(info.ignore_max_time_diff, Some(3));
        assert_eq!(info.ignore_max_val_diff, Some(5.0));
        assert_eq!(info.last_sample, Some(Sample::new(20, 10.0)));

        let empty = TimeSeries::new().info();
        assert_eq!(empty.ignore_max_time_diff, None);
        assert_eq!(empty.ignore_max_val_diff, None);
        assert_eq!(empty.last_timestamp, None);
    }

    #[test]
    fn test_restored_series_makes_same_decisions() {
        let mut ts = series_with_ignore(3, 5.0, DuplicatePolicy::KeepLast);
        add_all(&mut ts, &[(1000, 1.0), (1004, 3.0), (1006, 10.0), (1007, 15.0001)]);

        let mut restored = TimeSeries::from_snapshot(&ts.to_snapshot().unwrap()).unwrap();
        for (t, v) in [(1010, 16.0), (1011, 30.0), (1012, 31.0)] {
            assert_eq!(restored.add(t, v, None), ts.add(t, v, None));
        }
        assert_eq!(stored(&restored), stored(&ts));
    }
}
