//! Error types for solar computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which side of the hour-angle domain was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays below the horizon all day.
    PolarNight,
    /// The sun stays above the horizon all day.
    MidnightSun,
}

impl Display for PolarCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolarNight => write!(f, "sun never rises (polar night)"),
            Self::MidnightSun => write!(f, "sun never sets (midnight sun)"),
        }
    }
}

/// Errors from solar position and rise/set resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Hour-angle `acos` argument outside [-1, 1].
    Domain {
        condition: PolarCondition,
        cos_hour_angle: f64,
    },
    /// Latitude or longitude outside its range, or not finite.
    InputRange(&'static str),
    /// An intermediate value left the domain of a math function.
    Numeric(&'static str),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain {
                condition,
                cos_hour_angle,
            } => write!(f, "{condition}: cos(hour angle) = {cos_hour_angle:.6}"),
            Self::InputRange(msg) => write!(f, "input out of range: {msg}"),
            Self::Numeric(msg) => write!(f, "numeric error: {msg}"),
        }
    }
}

impl Error for SolarError {}
