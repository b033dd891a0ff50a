pub mod types;

use crate::common::types::Timestamp;

pub fn current_time_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}
