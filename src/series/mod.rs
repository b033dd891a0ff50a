mod duplicate_policy;
mod ignore_filter;
mod memory_storage;
mod serialization;
mod series_storage;
pub mod time_series;
pub mod types;
pub(crate) mod utils;

pub use duplicate_policy::*;
pub use ignore_filter::*;
pub use memory_storage::*;
pub use serialization::SERIES_ENCODING_VERSION;
pub use series_storage::*;
pub use time_series::*;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(test)] {
        mod timeseries_tests;
        pub mod test_utils;
    }
}
