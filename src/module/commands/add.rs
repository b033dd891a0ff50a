use valkey_module::{Context, NotifyEvent, ValkeyResult, ValkeyString, ValkeyValue};

use crate::commands;
use crate::config::get_global_settings;
use crate::module::{command_tokens, KeyspaceStorage};

///
/// TS.ADD key timestamp value
///     [IGNORE maxTimeDiff maxValDiff]
///     [DUPLICATE_POLICY policy]
///     [ON_DUPLICATE policy]
///     [LABELS label value ...]
///
pub fn add(ctx: &Context, args: Vec<ValkeyString>) -> ValkeyResult {
    let tokens = command_tokens(&args);
    let storage = KeyspaceStorage::new(ctx);
    let res = commands::add(&storage, get_global_settings(), &tokens)?;

    if !res.is_ignored() {
        let replicated = commands::add_replication_args(&tokens, res.timestamp());
        let replicated: Vec<&str> = replicated.iter().map(String::as_str).collect();
        ctx.replicate("TS.ADD", &replicated[..]);
        ctx.notify_keyspace_event(NotifyEvent::MODULE, "ts.add", &args[1]);
    }

    Ok(ValkeyValue::Integer(res.timestamp()))
}
