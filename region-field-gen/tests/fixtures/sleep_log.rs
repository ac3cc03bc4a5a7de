// @generated by region-field-gen. Edit the schema and regenerate instead.

impl SleepLog {
    /// Returns `wake_up_utc` presented in the zone stored in `wake_up_tz`, falling back to the local zone when the offset is out of range.
    #[must_use]
    pub fn wake_up(&self) -> region_field::DateInRegion {
        region_field::in_region(self.wake_up_utc, self.wake_up_tz)
    }
    /// Stores the instant of `value` in `wake_up_utc` and its UTC offset in `wake_up_tz`.
    pub fn set_wake_up(&mut self, value: region_field::DateInRegion) {
        let (utc, seconds) = region_field::split(&value);
        self.wake_up_utc = utc;
        self.wake_up_tz = seconds;
    }
    /// Returns `bedtime_utc` presented in the zone stored in `bedtime_tz`, falling back to the local zone when the offset is out of range. `None` unless both fields are set.
    #[must_use]
    pub fn bedtime(&self) -> ::core::option::Option<region_field::DateInRegion> {
        match (self.bedtime_tz, self.bedtime_utc) {
            (
                ::core::option::Option::Some(seconds),
                ::core::option::Option::Some(utc),
            ) => ::core::option::Option::Some(region_field::in_region(utc, seconds)),
            _ => ::core::option::Option::None,
        }
    }
    /// Stores the instant of `value` in `bedtime_utc` and its UTC offset in `bedtime_tz`. Assigning `None` leaves both fields unchanged.
    pub fn set_bedtime(
        &mut self,
        value: ::core::option::Option<region_field::DateInRegion>,
    ) {
        if let ::core::option::Option::Some(assigned) = value {
            let (utc, seconds) = region_field::split(&assigned);
            self.bedtime_utc = ::core::option::Option::Some(utc);
            self.bedtime_tz = ::core::option::Option::Some(seconds);
        }
    }
}
impl Alarm {
    /// Returns `ring_utc` presented in the zone stored in `ring_tz`, failing when the offset is out of range.
    pub(crate) fn ring(&self) -> region_field::RegionResult<region_field::DateInRegion> {
        region_field::try_in_region(self.ring_utc, self.ring_tz)
    }
    /// Stores the instant of `value` in `ring_utc` and its UTC offset in `ring_tz`.
    pub(crate) fn set_ring(&mut self, value: region_field::DateInRegion) {
        let (utc, seconds) = region_field::split(&value);
        self.ring_utc = utc;
        self.ring_tz = seconds;
    }
}
