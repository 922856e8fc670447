//! Sunrise/sunset resolution from the hour-angle formula.
//!
//! Single-pass NOAA algorithm: the solar declination and equation of time
//! are evaluated once at the given Julian Day (0h UT of the date), then the
//! hour angle at which the Sun's center reaches [`SUNRISE_ZENITH_DEG`] gives
//! the offset of each event from local apparent noon.
//!
//! Longitudes are east positive throughout, matching a geolocation fix:
//! `720 − 4·(λ + H)` moves events earlier in UTC as the observer moves east.

use sunclock_time::{CalendarDate, julian_century};

use crate::error::{PolarCondition, SolarError};
use crate::riseset_types::{DayTimes, GeoCoordinate, RiseSetEvent, SUNRISE_ZENITH_DEG, check_range};
use crate::solar_position::{declination_deg, equation_of_time_min};

/// Minutes of time per degree of hour angle.
const MINUTES_PER_DEG: f64 = 4.0;

/// Minutes from 0h UT to noon.
const NOON_MINUTES: f64 = 720.0;

/// Hour angle of sunrise in radians, always positive.
///
/// `cos H = cos(90.833°) / (cos φ · cos δ) − tan φ · tan δ`
///
/// # Errors
/// * [`SolarError::Domain`] with [`PolarCondition::PolarNight`] if
///   `cos H > 1`, or [`PolarCondition::MidnightSun`] if `cos H < -1`.
///   The argument is never clamped.
/// * [`SolarError::Numeric`] if `cos H` is not a number.
pub fn hour_angle_sunrise_rad(latitude_deg: f64, declination_deg: f64) -> Result<f64, SolarError> {
    let lat = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let cos_h = SUNRISE_ZENITH_DEG.to_radians().cos() / (lat.cos() * dec.cos())
        - lat.tan() * dec.tan();

    if cos_h.is_nan() {
        return Err(SolarError::Numeric("hour angle argument is not a number"));
    }
    if cos_h > 1.0 {
        return Err(SolarError::Domain {
            condition: PolarCondition::PolarNight,
            cos_hour_angle: cos_h,
        });
    }
    if cos_h < -1.0 {
        return Err(SolarError::Domain {
            condition: PolarCondition::MidnightSun,
            cos_hour_angle: cos_h,
        });
    }
    Ok(cos_h.acos())
}

/// UTC minute-of-day of sunrise (`is_sunrise`) or sunset, unrounded.
///
/// `t = 720 − 4·(λ + H) − E`, with `H` negated for sunset.
///
/// # Arguments
/// * `jd`: Julian Day at 0h UT of the date
/// * `latitude_deg`: north positive, [-90, 90]
/// * `longitude_deg`: east positive, [-180, 180]
pub fn resolve(
    is_sunrise: bool,
    jd: f64,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, SolarError> {
    check_range(latitude_deg, longitude_deg)?;

    let t = julian_century(jd);
    let eq_time = equation_of_time_min(t);
    let dec = declination_deg(t)?;

    let mut hour_angle = hour_angle_sunrise_rad(latitude_deg, dec)?;
    if !is_sunrise {
        hour_angle = -hour_angle;
    }

    let delta = longitude_deg + hour_angle.to_degrees();
    Ok(NOON_MINUTES - MINUTES_PER_DEG * delta - eq_time)
}

/// UTC minute-of-day of local apparent noon, unrounded.
///
/// Sunrise and sunset from [`resolve`] are symmetric about this value.
pub fn solar_noon_utc_min(jd: f64, longitude_deg: f64) -> f64 {
    let t = julian_century(jd);
    NOON_MINUTES - MINUTES_PER_DEG * longitude_deg - equation_of_time_min(t)
}

/// UTC minute-of-day of a rise/set event at a location.
pub fn compute_rise_set(
    event: RiseSetEvent,
    jd: f64,
    location: &GeoCoordinate,
) -> Result<f64, SolarError> {
    resolve(
        event.is_rising(),
        jd,
        location.latitude_deg,
        location.longitude_deg,
    )
}

/// Local sunrise and sunset minutes for a calendar date.
///
/// Each UTC time is floored to a whole minute before the fixed
/// `utc_offset_minutes` (east positive, e.g. +60 for CET) is added.
pub fn day_times(
    date: &CalendarDate,
    location: &GeoCoordinate,
    utc_offset_minutes: i32,
) -> Result<DayTimes, SolarError> {
    let jd = date.julian_day();
    let rise = compute_rise_set(RiseSetEvent::Sunrise, jd, location)?;
    let set = compute_rise_set(RiseSetEvent::Sunset, jd, location)?;
    Ok(DayTimes::new(
        rise.floor() as i32 + utc_offset_minutes,
        set.floor() as i32 + utc_offset_minutes,
    ))
}
