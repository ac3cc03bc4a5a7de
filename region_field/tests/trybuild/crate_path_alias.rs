//! `crate = "..."` is accepted and generated code resolves runtime helpers
//! through the given path. Uses the real crate name behind a re-export so no
//! workspace reconfiguration is needed.

mod support {
    pub use region_field as dates;
}

use chrono::{DateTime, Utc};
use region_field::date_in_region_field;

#[date_in_region_field("alarm", crate = "crate::support::dates", fallback = "error")]
struct Alarm<T> {
    label: T,
    alarm_utc: DateTime<Utc>,
    alarm_tz: i32,
}

fn main() {
    let alarm = Alarm {
        label: "morning",
        alarm_utc: DateTime::default(),
        alarm_tz: 0,
    };
    let _: &str = alarm.label;
    let _: region_field::RegionResult<region_field::DateInRegion> = alarm.alarm();
}
