// ev-core/src/units.rs

use uom::si::f64::Time as UomTime;

// Simulated time, canonical SI (f64 seconds internally)
pub type Time = UomTime;

pub const HOURS_PER_DAY: f64 = 24.0;

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn days(v: f64) -> Time {
    use uom::si::time::day;
    Time::new::<day>(v)
}

#[inline]
pub fn in_hours(t: Time) -> f64 {
    use uom::si::time::hour;
    t.get::<hour>()
}

#[inline]
pub fn in_days(t: Time) -> f64 {
    use uom::si::time::day;
    t.get::<day>()
}

/// Day count for an elapsed-hours reading.
///
/// Divides directly instead of round-tripping through [`Time`] so whole-day
/// readings stay exact.
#[inline]
pub fn hours_to_days(h: f64) -> f64 {
    h / HOURS_PER_DAY
}
