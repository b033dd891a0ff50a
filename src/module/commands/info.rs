use std::collections::HashMap;

use valkey_module::redisvalue::ValkeyValueKey;
use valkey_module::{Context, ValkeyResult, ValkeyString, ValkeyValue};

use crate::commands;
use crate::common::types::Label;
use crate::module::{command_tokens, KeyspaceStorage};
use crate::series::{SeriesInfo, SeriesStorage};

/// TS.INFO key
pub fn info(ctx: &Context, args: Vec<ValkeyString>) -> ValkeyResult {
    let tokens = command_tokens(&args);
    let storage = KeyspaceStorage::new(ctx);
    let info = commands::info(&storage, &tokens)?;
    let memory_usage = storage.with_series(&tokens[0], |series| Ok(series.memory_usage()))?;
    Ok(get_ts_info(info, memory_usage))
}

fn get_ts_info(info: SeriesInfo, memory_usage: usize) -> ValkeyValue {
    let mut map: HashMap<ValkeyValueKey, ValkeyValue> = HashMap::with_capacity(9);
    map.insert("totalSamples".into(), info.total_samples.into());
    map.insert("memoryUsage".into(), memory_usage.into());
    map.insert("firstTimestamp".into(), optional_integer(info.first_timestamp));
    map.insert("lastTimestamp".into(), optional_integer(info.last_timestamp));
    map.insert("duplicatePolicy".into(), info.duplicate_policy.as_str().into());

    // the filter thresholds are reported as null when no filter is configured
    let (max_time_diff, max_val_diff) = match (info.ignore_max_time_diff, info.ignore_max_val_diff) {
        (Some(time_diff), Some(val_diff)) => (
            ValkeyValue::Integer(time_diff as i64),
            ValkeyValue::BulkString(val_diff.to_string()),
        ),
        _ => (ValkeyValue::Null, ValkeyValue::Null),
    };
    map.insert("ignoreMaxTimeDiff".into(), max_time_diff);
    map.insert("ignoreMaxValDiff".into(), max_val_diff);

    let mut labels_map: HashMap<ValkeyValueKey, ValkeyValue> = HashMap::with_capacity(info.labels.len());
    for Label { name, value } in info.labels {
        labels_map.insert(ValkeyValueKey::String(name), ValkeyValue::from(value));
    }
    map.insert("labels".into(), ValkeyValue::from(labels_map));

    ValkeyValue::Map(map)
}

fn optional_integer(value: Option<i64>) -> ValkeyValue {
    value.map_or(ValkeyValue::Null, ValkeyValue::Integer)
}
