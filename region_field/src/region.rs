//! Zone reconstruction and decomposition used by generated accessors.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

use crate::error::{RegionError, RegionResult};

/// A UTC instant paired with the fixed offset it should be presented in.
pub type DateInRegion = DateTime<FixedOffset>;

/// Largest absolute UTC offset, in seconds, that maps to a zone.
///
/// This is the bound `FixedOffset` itself enforces (strictly less than one
/// day), so every offset a setter stores can be read back. Anything larger
/// is corrupt backing data.
pub const MAX_OFFSET_SECONDS: i32 = 24 * 3600 - 1;

/// Builds a fixed zone from an offset in seconds east of UTC.
///
/// Returns `None` when `seconds` lies outside ±[`MAX_OFFSET_SECONDS`].
///
/// ```rust
/// use region_field::zone_from_offset;
///
/// assert_eq!(zone_from_offset(3600).map(|z| z.local_minus_utc()), Some(3600));
/// assert_eq!(zone_from_offset(20 * 3600).map(|z| z.local_minus_utc()), Some(72_000));
/// assert!(zone_from_offset(24 * 3600).is_none());
/// ```
#[must_use]
pub fn zone_from_offset(seconds: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(seconds)
}

/// Offset of the process-local zone at the given instant.
#[must_use]
pub fn local_zone_at(utc: DateTime<Utc>) -> FixedOffset {
    Local.offset_from_utc_datetime(&utc.naive_utc())
}

/// Reinterprets `utc` in the zone described by `seconds`.
///
/// Falls back to the process-local zone when the offset cannot be turned
/// into a zone. The instant itself is never altered.
#[must_use]
pub fn in_region(utc: DateTime<Utc>, seconds: i32) -> DateInRegion {
    let zone = zone_from_offset(seconds).unwrap_or_else(|| {
        let local = local_zone_at(utc);
        tracing::debug!(
            seconds,
            fallback = local.local_minus_utc(),
            "stored UTC offset out of range; using the local zone"
        );
        local
    });
    utc.with_timezone(&zone)
}

/// Reinterprets `utc` in the zone described by `seconds`, failing instead of
/// falling back.
///
/// # Errors
///
/// Returns [`RegionError::OffsetOutOfRange`] when `seconds` lies outside
/// ±[`MAX_OFFSET_SECONDS`].
pub fn try_in_region(utc: DateTime<Utc>, seconds: i32) -> RegionResult<DateInRegion> {
    zone_from_offset(seconds)
        .map(|zone| utc.with_timezone(&zone))
        .ok_or(RegionError::OffsetOutOfRange {
            seconds,
            max: MAX_OFFSET_SECONDS,
        })
}

/// Seconds east of UTC of the value's zone.
#[must_use]
pub fn offset_seconds(value: &DateInRegion) -> i32 {
    value.offset().local_minus_utc()
}

/// Splits a value into the UTC instant and offset stored in backing fields.
#[must_use]
pub fn split(value: &DateInRegion) -> (DateTime<Utc>, i32) {
    (value.with_timezone(&Utc), offset_seconds(value))
}
