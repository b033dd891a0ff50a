use tracing::trace;

use super::arg_parse::{parse_series_options, parse_timestamp, parse_value, CommandArgs};
use crate::common::types::Timestamp;
use crate::config::Settings;
use crate::error::TsdbResult;
use crate::series::{DuplicatePolicy, SampleAddResult, SeriesStorage, TimeSeries, TimeSeriesOptions};

/// A fully validated `TS.ADD` request.
#[derive(Debug, Clone, PartialEq)]
pub struct AddRequest<'a> {
    pub key: &'a str,
    pub timestamp: Timestamp,
    pub value: f64,
    /// Applied only if the call creates the series.
    pub options: TimeSeriesOptions,
    pub on_duplicate: Option<DuplicatePolicy>,
}

///
/// TS.ADD key timestamp value
///     [IGNORE maxTimeDiff maxValDiff]
///     [DUPLICATE_POLICY policy]
///     [ON_DUPLICATE policy]
///     [LABELS label value ...]
///
/// Returns the timestamp to report: the sample's own, or that of the last stored sample
/// if the ignore filter dropped it.
pub fn add<S, A>(storage: &S, settings: &Settings, args: &[A]) -> TsdbResult<SampleAddResult>
where
    S: SeriesStorage,
    A: AsRef<str>,
{
    let request = parse_add_args(args)?;
    add_sample(storage, settings, request)
}

pub fn parse_add_args<A: AsRef<str>>(args: &[A]) -> TsdbResult<AddRequest<'_>> {
    let mut args = CommandArgs::new(args);
    let key = args.next_key()?;
    let timestamp = parse_timestamp(args.next_str()?)?;
    let value = parse_value(args.next_str()?)?;
    // options are validated even if the series already exists
    let (options, on_duplicate) = parse_series_options(&mut args, true)?;

    Ok(AddRequest {
        key,
        timestamp,
        value,
        options,
        on_duplicate,
    })
}

pub fn add_sample<S: SeriesStorage>(
    storage: &S,
    settings: &Settings,
    request: AddRequest,
) -> TsdbResult<SampleAddResult> {
    let AddRequest {
        key,
        timestamp,
        value,
        options,
        on_duplicate,
    } = request;

    let res = storage.with_series_or_create(
        key,
        || Ok(TimeSeries::with_options(options, settings)),
        |series| series.add(timestamp, value, on_duplicate),
    )?;
    trace!(key, timestamp, ?res, "sample offered");
    Ok(res)
}

/// Arguments to propagate for a stored `TS.ADD`, with the timestamp argument replaced by
/// the resolved one so that `*` is not re-evaluated against another clock.
pub fn add_replication_args<A: AsRef<str>>(args: &[A], timestamp: Timestamp) -> Vec<String> {
    args.iter()
        .enumerate()
        .map(|(idx, arg)| match idx {
            1 => timestamp.to_string(),
            _ => arg.as_ref().to_string(),
        })
        .collect()
}
