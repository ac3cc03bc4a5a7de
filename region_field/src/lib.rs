//! Runtime support for timezone-aware accessors generated by
//! `#[date_in_region_field]`.
//!
//! A model stores a date as two plain fields: the UTC instant and the offset
//! from UTC, in seconds, that was in effect where the value was recorded. The
//! attribute macro (re-exported here from `region_field_macros`) generates an
//! accessor pair that composes those fields into a single [`DateInRegion`] and
//! decomposes assignments back into them. The helpers in this crate are what
//! the generated code calls.
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use region_field::{DateInRegion, date_in_region_field};
//!
//! #[date_in_region_field("wake_up")]
//! struct SleepLog {
//!     wake_up_utc: DateTime<Utc>,
//!     wake_up_tz: i32,
//! }
//!
//! let mut log = SleepLog {
//!     wake_up_utc: DateTime::default(),
//!     wake_up_tz: 0,
//! };
//! let morning: DateInRegion = "2024-03-01T07:15:00+09:00".parse().unwrap();
//! log.set_wake_up(morning);
//! assert_eq!(log.wake_up_tz, 9 * 3600);
//! assert_eq!(log.wake_up(), morning);
//! ```

pub use region_field_macros::date_in_region_field;

mod error;
mod region;

pub use error::{RegionError, RegionResult};
pub use region::{
    DateInRegion, MAX_OFFSET_SECONDS, in_region, local_zone_at, offset_seconds, split,
    try_in_region, zone_from_offset,
};
