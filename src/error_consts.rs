pub const INVALID_TIMESTAMP: &str = "TSDB: invalid timestamp, must be a non-negative integer";
pub const INVALID_VALUE: &str = "TSDB: invalid value";
pub const INVALID_DUPLICATE_POLICY: &str = "TSDB: Unknown DUPLICATE_POLICY";
pub const IGNORE_ARGS_TOGETHER: &str = "TSDB: IGNORE maxTimeDiff and maxValDiff must be given together";
pub const INVALID_IGNORE_MAX_TIME_DIFF: &str = "TSDB: Couldn't parse IGNORE maxTimeDiff, must be a non-negative integer";
pub const INVALID_IGNORE_MAX_VAL_DIFF: &str = "TSDB: Couldn't parse IGNORE maxValDiff, must be a non-negative number";
pub const DUPLICATE_SAMPLE: &str = "TSDB: Error at upsert, update is not supported when DUPLICATE_POLICY is set to BLOCK mode";
pub const KEY_NOT_FOUND: &str = "TSDB: the key does not exist";
pub const KEY_EXISTS: &str = "TSDB: key already exists";
pub const MISSING_KEY: &str = "TSDB: missing key argument";
pub const WRONG_MADD_ARITY: &str = "TSDB: wrong number of arguments for 'TS.MADD' command";
pub const SERIES_LOCKED: &str = "TSDB: series lock poisoned";
pub const WRONG_ARITY: &str = "TSDB: wrong number of arguments";
pub const INVALID_LABELS: &str = "TSDB: LABELS must be followed by name value pairs";
