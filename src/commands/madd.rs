use ahash::AHashMap;
use rayon::prelude::*;
use tracing::debug;

use super::arg_parse::{parse_timestamp, parse_value};
use crate::common::types::Timestamp;
use crate::error::{TsdbError, TsdbResult};
use crate::error_consts;
use crate::series::{SampleAddResult, SeriesStorage};

/// Per-tuple outcome of `TS.MADD`, in request order.
pub type MaddResult = Vec<TsdbResult<SampleAddResult>>;

struct MaddInput<'a> {
    key: &'a str,
    sample: TsdbResult<(Timestamp, f64)>,
}

/// TS.MADD key timestamp value [key timestamp value ...]
///
/// Each tuple is processed on its own: a failing tuple reports its error in its slot and
/// does not affect the others.
pub fn madd<S, A>(storage: &S, args: &[A]) -> TsdbResult<MaddResult>
where
    S: SeriesStorage,
    A: AsRef<str>,
{
    let inputs = parse_madd_args(args)?;
    let res = inputs
        .into_iter()
        .map(|input| add_one(storage, input))
        .collect();
    Ok(res)
}

/// Same result as [`madd`], but tuples for different keys are ingested in parallel.
/// Tuples sharing a key are applied by one worker, in request order.
pub fn madd_parallel<S, A>(storage: &S, args: &[A]) -> TsdbResult<MaddResult>
where
    S: SeriesStorage + Sync,
    A: AsRef<str>,
{
    let inputs = parse_madd_args(args)?;
    let count = inputs.len();

    let mut groups: AHashMap<&str, Vec<(usize, MaddInput)>> = AHashMap::new();
    for (idx, input) in inputs.into_iter().enumerate() {
        groups.entry(input.key).or_default().push((idx, input));
    }
    debug!(samples = count, series = groups.len(), "parallel madd");

    let groups: Vec<_> = groups.into_iter().map(|(_, group)| group).collect();
    let processed: Vec<(usize, TsdbResult<SampleAddResult>)> = groups
        .into_par_iter()
        .flat_map_iter(|group| {
            group
                .into_iter()
                .map(|(idx, input)| (idx, add_one(storage, input)))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut results: Vec<Option<TsdbResult<SampleAddResult>>> = vec![None; count];
    for (idx, res) in processed {
        results[idx] = Some(res);
    }
    let res = results
        .into_iter()
        .map(|res| res.unwrap_or_else(|| Err(TsdbError::General("sample not processed".to_string()))))
        .collect();
    Ok(res)
}

fn parse_madd_args<A: AsRef<str>>(args: &[A]) -> TsdbResult<Vec<MaddInput<'_>>> {
    if args.is_empty() || args.len() % 3 != 0 {
        return Err(TsdbError::invalid_args(error_consts::WRONG_MADD_ARITY));
    }

    let inputs = args
        .chunks_exact(3)
        .map(|tuple| {
            let timestamp = parse_timestamp(tuple[1].as_ref());
            let value = parse_value(tuple[2].as_ref());
            MaddInput {
                key: tuple[0].as_ref(),
                sample: timestamp.and_then(|ts| value.map(|v| (ts, v))),
            }
        })
        .collect();
    Ok(inputs)
}

fn add_one<S: SeriesStorage>(storage: &S, input: MaddInput) -> TsdbResult<SampleAddResult> {
    let (timestamp, value) = input.sample?;
    storage.with_series_mut(input.key, |series| series.add(timestamp, value, None))
}

/// Arguments to propagate for a completed `TS.MADD`: only the tuples that changed a
/// series, each with its resolved timestamp. Empty if nothing was stored.
pub fn madd_replication_args<A: AsRef<str>>(args: &[A], results: &MaddResult) -> Vec<String> {
    args.chunks_exact(3)
        .zip(results)
        .filter_map(|(tuple, res)| match res {
            Ok(res) if !res.is_ignored() => Some([
                tuple[0].as_ref().to_string(),
                res.timestamp().to_string(),
                tuple[2].as_ref().to_string(),
            ]),
            _ => None,
        })
        .flatten()
        .collect()
}
