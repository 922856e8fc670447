//! Solar position and sunrise/sunset resolution.
//!
//! This crate provides:
//! - Low-precision solar parameters as polynomials in Julian centuries
//!   (mean longitude, anomaly, obliquity, declination, equation of time)
//! - The sunrise hour angle and UTC rise/set minute-of-day resolver
//! - Local `DayTimes` for a calendar date, location and fixed UTC offset
//!
//! Everything here is a pure function of its inputs.

pub mod error;
pub mod riseset;
pub mod riseset_types;
pub mod solar_position;
pub mod util;

pub use error::{PolarCondition, SolarError};
pub use riseset::{
    compute_rise_set, day_times, hour_angle_sunrise_rad, resolve, solar_noon_utc_min,
};
pub use riseset_types::{DayTimes, GeoCoordinate, RiseSetEvent, SUNRISE_ZENITH_DEG};
pub use solar_position::{
    SolarParameters, apparent_longitude_deg, corrected_obliquity_deg, declination_deg,
    eccentricity, equation_of_center_deg, equation_of_time_min, geom_mean_anomaly_deg,
    geom_mean_longitude_deg, mean_obliquity_deg, true_longitude_deg,
};
