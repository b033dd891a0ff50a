use valkey_module::{Context, NotifyEvent, ValkeyError, ValkeyResult, ValkeyString, ValkeyValue};

use crate::commands;
use crate::module::{command_tokens, KeyspaceStorage};

/// TS.MADD key timestamp value [key timestamp value ...]
pub fn madd(ctx: &Context, args: Vec<ValkeyString>) -> ValkeyResult {
    if args.len() < 4 {
        return Err(ValkeyError::WrongArity);
    }
    let tokens = command_tokens(&args);
    let storage = KeyspaceStorage::new(ctx);
    let results = commands::madd(&storage, &tokens)?;

    let mut values: Vec<ValkeyValue> = Vec::with_capacity(results.len());
    for (res, key) in results.iter().zip(args[1..].iter().step_by(3)) {
        match res {
            Ok(res) => {
                if !res.is_ignored() {
                    ctx.notify_keyspace_event(NotifyEvent::MODULE, "ts.add", key);
                }
                values.push(ValkeyValue::Integer(res.timestamp()));
            }
            Err(err) => values.push(ValkeyValue::SimpleString(format!("ERR {err}"))),
        }
    }

    let replicated = commands::madd_replication_args(&tokens, &results);
    if !replicated.is_empty() {
        let replicated: Vec<&str> = replicated.iter().map(String::as_str).collect();
        ctx.replicate("TS.MADD", &replicated[..]);
    }

    Ok(ValkeyValue::Array(values))
}
