//! Types for sunrise/sunset calculations.
//!
//! Provides the observer coordinate, the rise/set event selector and the
//! per-day result used by the rise/set resolver.

use crate::error::SolarError;

/// Zenith distance of the Sun's center at apparent sunrise/sunset, degrees.
///
/// 90 deg + 34' standard refraction + 16' solar semidiameter ≈ 90.833 deg.
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Geographic coordinate of an observer, as delivered by a location fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a coordinate, rejecting values outside the valid ranges.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        check_range(latitude_deg, longitude_deg)?;
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Validate latitude/longitude ranges.
pub(crate) fn check_range(latitude_deg: f64, longitude_deg: f64) -> Result<(), SolarError> {
    if !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(SolarError::InputRange("latitude must be within [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(SolarError::InputRange("longitude must be within [-180, 180]"));
    }
    Ok(())
}

/// Rise/set event selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears on the horizon.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    /// Whether this is the morning event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Sunrise and sunset of one day as local minutes past midnight.
///
/// Values are not wrapped: a far-east location with a small UTC offset can
/// yield a negative sunrise, and the reverse can exceed 1440.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayTimes {
    pub sunrise_minutes: i32,
    pub sunset_minutes: i32,
}

impl DayTimes {
    pub fn new(sunrise_minutes: i32, sunset_minutes: i32) -> Self {
        Self {
            sunrise_minutes,
            sunset_minutes,
        }
    }

    /// Minutes between sunrise and sunset.
    pub fn day_length_minutes(&self) -> i32 {
        self.sunset_minutes - self.sunrise_minutes
    }

    /// Minutes of darkness in a 24-hour day.
    pub fn night_length_minutes(&self) -> i32 {
        24 * 60 - self.day_length_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_accepts_bounds() {
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
        assert!(GeoCoordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn coordinate_rejects_latitude() {
        assert_eq!(
            GeoCoordinate::new(90.5, 0.0),
            Err(SolarError::InputRange("latitude must be within [-90, 90]"))
        );
    }

    #[test]
    fn coordinate_rejects_longitude() {
        assert_eq!(
            GeoCoordinate::new(0.0, -180.01),
            Err(SolarError::InputRange("longitude must be within [-180, 180]"))
        );
    }

    #[test]
    fn coordinate_rejects_nan() {
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn latitude_radians() {
        let c = GeoCoordinate::new(28.6139, 77.209).unwrap();
        assert!((c.latitude_rad() - 28.6139_f64.to_radians()).abs() < 1e-15);
    }

    #[test]
    fn is_rising_correct() {
        assert!(RiseSetEvent::Sunrise.is_rising());
        assert!(!RiseSetEvent::Sunset.is_rising());
    }

    #[test]
    fn day_and_night_lengths() {
        let d = DayTimes::new(360, 1080);
        assert_eq!(d.day_length_minutes(), 720);
        assert_eq!(d.night_length_minutes(), 720);

        let summer = DayTimes::new(283, 1281);
        assert_eq!(summer.day_length_minutes(), 998);
        assert_eq!(summer.night_length_minutes(), 442);
    }
}
