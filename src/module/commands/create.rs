use valkey_module::{Context, NotifyEvent, ValkeyResult, ValkeyString, VALKEY_OK};

use crate::commands;
use crate::config::get_global_settings;
use crate::module::{command_tokens, KeyspaceStorage};

/// TS.CREATE key [IGNORE maxTimeDiff maxValDiff] [DUPLICATE_POLICY policy] [LABELS label value ...]
pub fn create(ctx: &Context, args: Vec<ValkeyString>) -> ValkeyResult {
    let tokens = command_tokens(&args);
    let storage = KeyspaceStorage::new(ctx);
    commands::create(&storage, get_global_settings(), &tokens)?;

    ctx.replicate_verbatim();
    ctx.notify_keyspace_event(NotifyEvent::MODULE, "ts.create", &args[1]);
    ctx.log_verbose("series created");

    VALKEY_OK
}
