use valkey_module::{Context, NotifyEvent, ValkeyResult, ValkeyString, VALKEY_OK};

use crate::commands;
use crate::module::{command_tokens, KeyspaceStorage};

/// TS.ALTER key [IGNORE maxTimeDiff maxValDiff] [DUPLICATE_POLICY policy] [LABELS label value ...]
pub fn alter(ctx: &Context, args: Vec<ValkeyString>) -> ValkeyResult {
    let tokens = command_tokens(&args);
    let storage = KeyspaceStorage::new(ctx);
    commands::alter(&storage, &tokens)?;

    ctx.replicate_verbatim();
    ctx.notify_keyspace_event(NotifyEvent::MODULE, "ts.alter", &args[1]);
    VALKEY_OK
}
