//! Companion device message.

use serde::{Deserialize, Serialize};

use sunclock_solar::DayTimes;

/// Sunrise/sunset pair pushed to the device once per tick.
///
/// Field names on the wire are the device's message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SunTimesMessage {
    /// Local minute-of-day of the next (or current day's) sunrise.
    #[serde(rename = "RISEMINS")]
    pub rise_minutes: i32,
    /// Local minute-of-day of the most recent (or current day's) sunset.
    #[serde(rename = "SETMINS")]
    pub set_minutes: i32,
}

impl SunTimesMessage {
    pub fn new(rise_minutes: i32, set_minutes: i32) -> Self {
        Self {
            rise_minutes,
            set_minutes,
        }
    }

    /// Sunrise taken from `rise_day`, sunset from `set_day`.
    pub fn from_days(rise_day: &DayTimes, set_day: &DayTimes) -> Self {
        Self::new(rise_day.sunrise_minutes, set_day.sunset_minutes)
    }
}
