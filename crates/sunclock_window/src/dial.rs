//! Geometry of the 24-hour dial drawn from a sun-times message.
//!
//! The dial splits daylight and darkness into twelve temporal hours each,
//! so hour marks bunch together in winter days and spread out in summer.

use crate::message::SunTimesMessage;

const DAY_MINUTES: i32 = 24 * 60;

/// Fraction of a full 24-hour turn for a local minute-of-day.
///
/// Minutes outside [0, 1440) wrap around.
pub fn turn_fraction(minute_of_day: f64) -> f64 {
    minute_of_day.rem_euclid(DAY_MINUTES as f64) / DAY_MINUTES as f64
}

/// Temporal (seasonal) hour, numbered 1 to 12 from sunrise or sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalHour {
    Day(u8),
    Night(u8),
}

/// Sunrise and sunset positions on the dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialLayout {
    rise_minutes: i32,
    set_minutes: i32,
}

impl DialLayout {
    /// Layout for a delivered message, `None` until both values are set.
    pub fn from_message(message: &SunTimesMessage) -> Option<Self> {
        if message.rise_minutes == 0 || message.set_minutes == 0 {
            return None;
        }
        Some(Self {
            rise_minutes: message.rise_minutes.rem_euclid(DAY_MINUTES),
            set_minutes: message.set_minutes.rem_euclid(DAY_MINUTES),
        })
    }

    pub fn rise_minutes(&self) -> i32 {
        self.rise_minutes
    }

    pub fn set_minutes(&self) -> i32 {
        self.set_minutes
    }

    /// Minutes from sunrise to sunset.
    pub fn day_minutes(&self) -> i32 {
        (self.set_minutes - self.rise_minutes).rem_euclid(DAY_MINUTES)
    }

    /// Minutes from sunset to the following sunrise.
    pub fn night_minutes(&self) -> i32 {
        DAY_MINUTES - self.day_minutes()
    }

    /// Start of each daylight hour, minutes past midnight.
    pub fn day_marks(&self) -> [f64; 12] {
        marks(self.rise_minutes, self.day_minutes())
    }

    /// Start of each night hour, minutes past midnight.
    pub fn night_marks(&self) -> [f64; 12] {
        marks(self.set_minutes, self.night_minutes())
    }

    /// Temporal hour containing `minute_of_day`.
    pub fn temporal_hour(&self, minute_of_day: f64) -> TemporalHour {
        let day_len = f64::from(self.day_minutes());
        let since_rise = (minute_of_day - f64::from(self.rise_minutes)).rem_euclid(DAY_MINUTES as f64);
        if since_rise < day_len {
            TemporalHour::Day(hour_index(since_rise, day_len))
        } else {
            TemporalHour::Night(hour_index(since_rise - day_len, f64::from(self.night_minutes())))
        }
    }
}

fn marks(start: i32, span: i32) -> [f64; 12] {
    let start = f64::from(start);
    let span = f64::from(span);
    std::array::from_fn(|i| (start + span * i as f64 / 12.0).rem_euclid(DAY_MINUTES as f64))
}

fn hour_index(elapsed: f64, span: f64) -> u8 {
    ((elapsed / span * 12.0).floor() as u8).min(11) + 1
}
