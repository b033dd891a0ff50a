use tracing::debug;

use super::arg_parse::{parse_series_options, CommandArgs};
use crate::error::TsdbResult;
use crate::series::SeriesStorage;

/// TS.ALTER key [IGNORE maxTimeDiff maxValDiff] [DUPLICATE_POLICY policy] [LABELS label value ...]
///
/// Only samples ingested after the call see the new configuration.
pub fn alter<S, A>(storage: &S, args: &[A]) -> TsdbResult<()>
where
    S: SeriesStorage,
    A: AsRef<str>,
{
    let mut args = CommandArgs::new(args);
    let key = args.next_key()?;
    let (options, _) = parse_series_options(&mut args, false)?;

    storage.with_series_mut(key, |series| {
        series.alter(options);
        Ok(())
    })?;
    debug!(key, "series altered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, create};
    use crate::common::types::Label;
    use crate::config::Settings;
    use crate::error::TsdbError;
    use crate::series::{DuplicatePolicy, MemorySeriesStorage};

    #[test]
    fn test_alter_thresholds() {
        let storage = MemorySeriesStorage::new();
        let settings = Settings::default();
        create(&storage, &settings, &["key1", "IGNORE", "3", "5", "DUPLICATE_POLICY", "LAST"]).unwrap();
        for (t, v) in [("1000", "1"), ("1001", "2"), ("1004", "3"), ("1005", "8"), ("1006", "10"), ("1007", "15.0001")] {
            add(&storage, &settings, &["key1", t, v]).unwrap();
        }

        alter(&storage, &["key1", "IGNORE", "2", "4", "LABELS", "host", "a"]).unwrap();

        storage
            .with_series("key1", |s| {
                let info = s.info();
                assert_eq!(info.total_samples, 4);
                assert_eq!(info.ignore_max_time_diff, Some(2));
                assert_eq!(info.ignore_max_val_diff, Some(4.0));
                assert_eq!(info.duplicate_policy, DuplicatePolicy::KeepLast);
                assert_eq!(info.labels, vec![Label::new("host", "a")]);
                Ok(())
            })
            .unwrap();

        let res = add(&storage, &settings, &["key1", "1010", "19"]).unwrap();
        assert_eq!(res.timestamp(), 1010);
    }

    #[test]
    fn test_alter_rejects_invalid_options_without_change() {
        let storage = MemorySeriesStorage::new();
        create(&storage, &Settings::default(), &["k", "IGNORE", "3", "5"]).unwrap();

        for args in [
            &["k", "IGNORE", "2"][..],
            &["k", "IGNORE", "2", "-1"][..],
            &["k", "DUPLICATE_POLICY", "LAST", "IGNORE", "x", "1"][..],
        ] {
            assert!(matches!(alter(&storage, args), Err(TsdbError::InvalidArguments(_))));
        }

        let info = storage.with_series("k", |s| Ok(s.info())).unwrap();
        assert_eq!(info.ignore_max_time_diff, Some(3));
        assert_eq!(info.duplicate_policy, DuplicatePolicy::Block);
    }

    #[test]
    fn test_alter_unknown_key() {
        let storage = MemorySeriesStorage::new();
        assert_eq!(
            alter(&storage, &["nope", "DUPLICATE_POLICY", "LAST"]),
            Err(TsdbError::UnknownSeries("nope".to_string()))
        );
    }
}
