use valkey_module::{Context, ValkeyResult, ValkeyString, ValkeyValue};

use crate::commands;
use crate::module::{command_tokens, KeyspaceStorage};

pub fn get(ctx: &Context, args: Vec<ValkeyString>) -> ValkeyResult {
    let tokens = command_tokens(&args);
    let storage = KeyspaceStorage::new(ctx);

    let result = match commands::get(&storage, &tokens)? {
        Some(sample) => vec![ValkeyValue::from(sample.timestamp), ValkeyValue::from(sample.value)],
        None => vec![],
    };

    Ok(ValkeyValue::Array(result))
}
