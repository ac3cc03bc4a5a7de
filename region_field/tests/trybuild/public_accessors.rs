//! Accessors follow the struct's visibility and are callable from outside
//! the defining module.

mod model {
    use chrono::{DateTime, Utc};
    use region_field::date_in_region_field;

    #[date_in_region_field("wake_up")]
    #[date_in_region_field("bedtime", nullable = true)]
    #[derive(Default)]
    pub struct SleepLog {
        pub wake_up_utc: DateTime<Utc>,
        pub wake_up_tz: i32,
        pub bedtime_utc: Option<DateTime<Utc>>,
        pub bedtime_tz: Option<i32>,
    }
}

fn main() {
    let mut log = model::SleepLog::default();
    let now: region_field::DateInRegion = log.wake_up();
    log.set_wake_up(now);
    log.set_bedtime(Some(now));
    let _: Option<region_field::DateInRegion> = log.bedtime();
}
