use std::os::raw::{c_int, c_void};
use std::ptr::null_mut;

use tracing::error;
use valkey_module::native_types::ValkeyType;
use valkey_module::raw;
use valkey_module::{RedisModuleString, RedisModuleTypeMethods, REDISMODULE_AUX_BEFORE_RDB};

use crate::series::{TimeSeries, SERIES_ENCODING_VERSION};
use crate::MODULE_TYPE;

// see https://github.com/redis/redis/blob/unstable/tests/modules

pub static VKM_SERIES_TYPE: ValkeyType = ValkeyType::new(
    MODULE_TYPE,
    SERIES_ENCODING_VERSION as i32,
    RedisModuleTypeMethods {
        version: valkey_module::TYPE_METHOD_VERSION,
        rdb_load: Some(rdb_load),
        rdb_save: Some(rdb_save),
        aof_rewrite: None,
        free: Some(free),
        mem_usage: Some(mem_usage),
        digest: None,
        aux_load: None,
        aux_save: None,
        aux_save_triggers: REDISMODULE_AUX_BEFORE_RDB as i32,
        free_effort: None,
        unlink: None,
        copy: Some(copy),
        defrag: None,
        mem_usage2: None,
        free_effort2: None,
        unlink2: None,
        copy2: None,
        aux_save2: None,
    },
);

unsafe extern "C" fn rdb_save(rdb: *mut raw::RedisModuleIO, value: *mut c_void) {
    let series = &*value.cast::<TimeSeries>();
    match series.to_snapshot() {
        Ok(encoded) => raw::save_string(rdb, &encoded),
        Err(e) => {
            // unreachable for series built through `TimeSeries::add`, which only admits finite values
            error!(error = %e, samples = series.len(), "cannot encode series for RDB, saving an empty payload");
            raw::save_string(rdb, "");
        }
    }
}

unsafe extern "C" fn rdb_load(rdb: *mut raw::RedisModuleIO, _encver: c_int) -> *mut c_void {
    let Ok(data) = raw::load_string(rdb) else {
        return null_mut();
    };
    match TimeSeries::from_snapshot(&data.to_string_lossy()) {
        Ok(series) => Box::into_raw(Box::new(series)).cast::<c_void>(),
        Err(e) => {
            error!(error = %e, "cannot restore series from RDB");
            null_mut()
        }
    }
}

unsafe extern "C" fn mem_usage(value: *const c_void) -> usize {
    let series = &*value.cast::<TimeSeries>();
    series.memory_usage()
}

unsafe extern "C" fn free(value: *mut c_void) {
    if value.is_null() {
        return;
    }
    drop(Box::from_raw(value.cast::<TimeSeries>()));
}

#[allow(non_snake_case, unused)]
unsafe extern "C" fn copy(
    fromkey: *mut RedisModuleString,
    tokey: *mut RedisModuleString,
    value: *const c_void,
) -> *mut c_void {
    let series = &*value.cast::<TimeSeries>();
    Box::into_raw(Box::new(series.clone())).cast::<c_void>()
}
