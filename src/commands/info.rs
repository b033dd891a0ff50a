use super::arg_parse::CommandArgs;
use crate::common::types::Sample;
use crate::error::TsdbResult;
use crate::series::{SeriesInfo, SeriesStorage};

/// TS.INFO key
pub fn info<S, A>(storage: &S, args: &[A]) -> TsdbResult<SeriesInfo>
where
    S: SeriesStorage,
    A: AsRef<str>,
{
    let mut args = CommandArgs::new(args);
    let key = args.next_key()?;
    args.done()?;
    storage.with_series(key, |series| Ok(series.info()))
}

/// TS.GET key
///
/// The last stored sample, if any.
pub fn get<S, A>(storage: &S, args: &[A]) -> TsdbResult<Option<Sample>>
where
    S: SeriesStorage,
    A: AsRef<str>,
{
    let mut args = CommandArgs::new(args);
    let key = args.next_key()?;
    args.done()?;
    storage.with_series(key, |series| Ok(series.last_sample()))
}
