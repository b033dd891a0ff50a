mod commands;
mod keyspace_storage;
mod ts_db;

use valkey_module::{valkey_module, Context, Status, ValkeyString};

use crate::config::{init_global_settings, Settings};
use crate::{MODULE_NAME, VALKEY_TIMESERIES_VERSION};
pub(crate) use keyspace_storage::*;
pub(crate) use ts_db::*;

/// Command tokens without the command name.
pub(crate) fn command_tokens(args: &[ValkeyString]) -> Vec<String> {
    args.iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy())
        .collect()
}

fn initialize(ctx: &Context, args: &[ValkeyString]) -> Status {
    let args = module_args(args);
    let settings = if args.is_empty() {
        Settings::from_env()
    } else {
        Settings::from_args(&args)
    };

    match settings {
        Ok(settings) => {
            ctx.log_notice(&format!(
                "{MODULE_NAME} loaded: DUPLICATE_POLICY={} IGNORE={:?}",
                settings.duplicate_policy, settings.ignore_filter
            ));
            if !init_global_settings(settings) {
                ctx.log_warning("module settings were already initialized");
            }
            Status::Ok
        }
        Err(e) => {
            ctx.log_warning(&format!("{MODULE_NAME}: invalid module arguments: {e}"));
            Status::Err
        }
    }
}

fn module_args(args: &[ValkeyString]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string_lossy()).collect()
}

#[cfg(not(test))]
macro_rules! get_allocator {
    () => {
        valkey_module::alloc::ValkeyAlloc
    };
}

#[cfg(test)]
macro_rules! get_allocator {
    () => {
        std::alloc::System
    };
}

valkey_module! {
    name: MODULE_NAME,
    version: VALKEY_TIMESERIES_VERSION,
    allocator: (get_allocator!(), get_allocator!()),
    data_types: [VKM_SERIES_TYPE],
    init: initialize,
    commands: [
        ["TS.CREATE", commands::create, "write deny-oom", 1, 1, 1],
        ["TS.ALTER", commands::alter, "write deny-oom", 1, 1, 1],
        ["TS.ADD", commands::add, "write deny-oom", 1, 1, 1],
        ["TS.MADD", commands::madd, "write deny-oom", 1, -1, 3],
        ["TS.GET", commands::get, "readonly", 1, 1, 1],
        ["TS.INFO", commands::info, "readonly", 1, 1, 1],
    ],
}
