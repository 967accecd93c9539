use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix time in seconds, used to stamp records at creation
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs() as i64
}
