//! Julian Day Number from calendar fields.
//!
//! Meeus-style algorithm with the Gregorian correction term. Months are
//! counted from March so that the leap day falls at the end of the year.
//!
//! Callers pass a zero-based day and a zero-based month; both are shifted
//! by one before the computation. The `- 1524.5` term places the result at
//! 0h UT of the resulting civil date rather than at noon.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Day at 0h UT for the given calendar fields.
///
/// `day` and `month` are zero-based (`day = 0, month = 0` is January 1st).
/// No validation is performed: out-of-range fields propagate through the
/// arithmetic, so `day = 31, month = 0` lands on February 1st.
pub fn julian_day(day: i32, month: i32, year: i32) -> f64 {
    let mut m = f64::from(month + 1);
    let d = f64::from(day + 1);
    let mut y = f64::from(year);

    if m <= 2.0 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5
}

/// Julian centuries elapsed since J2000.0.
///
/// `T = (JD - 2451545.0) / 36525.0`
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
