extern crate get_size;

pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod error_consts;
pub mod series;

#[cfg(feature = "module")]
mod module;

pub const VALKEY_TIMESERIES_VERSION: i32 = 1;
pub const MODULE_NAME: &str = "vktimeseries";
pub const MODULE_TYPE: &str = "vktseries";
