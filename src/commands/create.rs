use tracing::debug;

use super::arg_parse::{parse_series_options, CommandArgs};
use crate::config::Settings;
use crate::error::TsdbResult;
use crate::series::{SeriesStorage, TimeSeries, TimeSeriesOptions};

/// Create a new time series
///
/// TS.CREATE key
///   [IGNORE maxTimeDiff maxValDiff]
///   [DUPLICATE_POLICY policy]
///   [LABELS label value ...]
pub fn create<S, A>(storage: &S, settings: &Settings, args: &[A]) -> TsdbResult<()>
where
    S: SeriesStorage,
    A: AsRef<str>,
{
    let (key, options) = parse_create_options(args)?;
    create_series(storage, key, options, settings)
}

pub fn parse_create_options<A: AsRef<str>>(args: &[A]) -> TsdbResult<(&str, TimeSeriesOptions)> {
    let mut args = CommandArgs::new(args);
    let key = args.next_key()?;
    let (options, _) = parse_series_options(&mut args, false)?;
    Ok((key, options))
}

pub(crate) fn create_series<S: SeriesStorage>(
    storage: &S,
    key: &str,
    options: TimeSeriesOptions,
    settings: &Settings,
) -> TsdbResult<()> {
    let series = TimeSeries::with_options(options, settings);
    debug!(
        key,
        duplicate_policy = %series.duplicate_policy,
        ignore = ?series.ignore_filter,
        "creating series"
    );
    storage.create_series(key, series)
}
