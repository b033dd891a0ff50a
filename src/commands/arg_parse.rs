use crate::common::current_time_millis;
use crate::common::types::{Label, Timestamp};
use crate::error::{TsdbError, TsdbResult};
use crate::error_consts;
use crate::series::{DuplicatePolicy, IgnoreFilter, TimeSeriesOptions};

pub const CMD_ARG_DUPLICATE_POLICY: &str = "DUPLICATE_POLICY";
pub const CMD_ARG_ON_DUPLICATE: &str = "ON_DUPLICATE";
pub const CMD_ARG_IGNORE: &str = "IGNORE";
pub const CMD_ARG_LABELS: &str = "LABELS";

/// Cursor over the tokens of a command, command name excluded.
pub struct CommandArgs<'a, S: AsRef<str>> {
    args: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> CommandArgs<'a, S> {
    pub fn new(args: &'a [S]) -> Self {
        Self { args, pos: 0 }
    }

    pub fn next_str(&mut self) -> TsdbResult<&'a str> {
        let arg = self.args.get(self.pos).ok_or_else(wrong_arity)?;
        self.pos += 1;
        Ok(arg.as_ref())
    }

    pub fn next_opt(&mut self) -> Option<&'a str> {
        self.next_str().ok()
    }

    pub fn next_key(&mut self) -> TsdbResult<&'a str> {
        self.next_str()
            .map_err(|_| TsdbError::invalid_args(error_consts::MISSING_KEY))
    }

    pub fn remaining(&self) -> usize {
        self.args.len() - self.pos
    }

    pub fn done(&self) -> TsdbResult<()> {
        if self.remaining() > 0 {
            return Err(wrong_arity());
        }
        Ok(())
    }
}

fn wrong_arity() -> TsdbError {
    TsdbError::invalid_args(error_consts::WRONG_ARITY)
}

/// A non-negative integer millisecond timestamp, or `*` for the current time.
pub fn parse_timestamp(arg: &str) -> TsdbResult<Timestamp> {
    if arg == "*" {
        return Ok(current_time_millis());
    }
    match arg.parse::<Timestamp>() {
        Ok(ts) if ts >= 0 => Ok(ts),
        _ => Err(TsdbError::InvalidTimestamp(arg.to_string())),
    }
}

pub fn parse_value(arg: &str) -> TsdbResult<f64> {
    match arg.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TsdbError::InvalidValue(arg.to_string())),
    }
}

pub fn parse_duplicate_policy<S: AsRef<str>>(args: &mut CommandArgs<S>) -> TsdbResult<DuplicatePolicy> {
    let arg = args
        .next_str()
        .map_err(|_| TsdbError::InvalidDuplicatePolicy(String::new()))?;
    arg.parse()
}

/// `IGNORE maxTimeDiff maxValDiff`. A missing second token is reported the same way
/// as a missing pair.
pub fn parse_ignore_filter<S: AsRef<str>>(args: &mut CommandArgs<S>) -> TsdbResult<IgnoreFilter> {
    let max_time_diff = args.next_opt();
    let max_value_diff = args.next_opt();
    IgnoreFilter::parse(max_time_diff, max_value_diff)?
        .ok_or_else(|| TsdbError::invalid_args(error_consts::IGNORE_ARGS_TOGETHER))
}

/// `LABELS name value [name value ...]`. Consumes the rest of the command.
pub fn parse_labels<S: AsRef<str>>(args: &mut CommandArgs<S>) -> TsdbResult<Vec<Label>> {
    if args.remaining() == 0 || args.remaining() % 2 != 0 {
        return Err(TsdbError::invalid_args(error_consts::INVALID_LABELS));
    }
    let mut labels = Vec::with_capacity(args.remaining() / 2);
    while let Some(name) = args.next_opt() {
        let value = args.next_str()?;
        labels.push(Label::new(name, value));
    }
    Ok(labels)
}

/// Options shared by `TS.CREATE`, `TS.ADD` and `TS.ALTER`, plus the per-call
/// `ON_DUPLICATE` override when `allow_on_duplicate` is set.
pub fn parse_series_options<S: AsRef<str>>(
    args: &mut CommandArgs<S>,
    allow_on_duplicate: bool,
) -> TsdbResult<(TimeSeriesOptions, Option<DuplicatePolicy>)> {
    let mut options = TimeSeriesOptions::default();
    let mut on_duplicate = None;

    while let Some(arg) = args.next_opt() {
        match arg {
            arg if arg.eq_ignore_ascii_case(CMD_ARG_IGNORE) => {
                options.ignore_filter(parse_ignore_filter(args)?);
            }
            arg if arg.eq_ignore_ascii_case(CMD_ARG_DUPLICATE_POLICY) => {
                options.duplicate_policy(parse_duplicate_policy(args)?);
            }
            arg if allow_on_duplicate && arg.eq_ignore_ascii_case(CMD_ARG_ON_DUPLICATE) => {
                on_duplicate = Some(parse_duplicate_policy(args)?);
            }
            arg if arg.eq_ignore_ascii_case(CMD_ARG_LABELS) => {
                options.labels(parse_labels(args)?);
            }
            _ => {
                let msg = format!("TSDB: invalid argument '{arg}'");
                return Err(TsdbError::InvalidArguments(msg));
            }
        }
    }

    Ok((options, on_duplicate))
}
