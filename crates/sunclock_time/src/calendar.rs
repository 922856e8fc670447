//! Civil calendar date as read from a wall clock.
//!
//! `CalendarDate` keeps the field conventions of the clock it came from:
//! a one-based day of month and a zero-based month index.

use crate::julian::julian_day;

/// Civil calendar date with a one-based day and a zero-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    /// Day of month, 1-31.
    pub day: u32,
    /// Month index, 0-11 (January is 0).
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Build from conventional one-based month and day numbers.
    ///
    /// Months outside 1-12 carry into the year the same way
    /// [`julian_day`] treats them: month 0 is December of the previous
    /// year, month 13 January of the next.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        let month0 = i64::from(month) - 1;
        Self {
            day,
            month: month0.rem_euclid(12) as u32,
            year: year + month0.div_euclid(12) as i32,
        }
    }

    /// Julian Day at 0h UT of this date.
    pub fn julian_day(&self) -> f64 {
        // julian_day() shifts day and month by one; undo the one-based day here
        julian_day(self.day as i32 - 1, self.month as i32, self.year)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = String;

    /// Parse `YYYY-MM-DD` with a one-based month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(format!("expected YYYY-MM-DD, got {s}"));
        }
        let year: i32 = parts[0].parse().map_err(|e| format!("year: {e}"))?;
        let month: u32 = parts[1].parse().map_err(|e| format!("month: {e}"))?;
        let day: u32 = parts[2].parse().map_err(|e| format!("day: {e}"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("month out of range: {month}"));
        }
        if !(1..=31).contains(&day) {
            return Err(format!("day out of range: {day}"));
        }
        Ok(Self::from_ymd(year, month, day))
    }
}
