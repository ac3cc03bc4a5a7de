//! The field name must be a string literal, not a bare identifier.

use chrono::{DateTime, Utc};
use region_field::date_in_region_field;

#[date_in_region_field(wake_up)]
struct SleepLog {
    wake_up_utc: DateTime<Utc>,
    wake_up_tz: i32,
}

fn main() {
    let log = SleepLog {
        wake_up_utc: DateTime::default(),
        wake_up_tz: 0,
    };
    let _ = (log.wake_up_utc, log.wake_up_tz);
}
