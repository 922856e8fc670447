//! Yesterday/today/tomorrow sunrise and sunset for one location.

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, warn};

use sunclock_solar::{DayTimes, GeoCoordinate, SolarError, day_times};
use sunclock_time::CalendarDate;

/// Outcome of resolving one day: polar days keep their error so the
/// scheduler can suppress that day's message.
pub type SlotResult = Result<DayTimes, SolarError>;

/// Convert a chrono date to the wall-clock field convention.
pub fn calendar_date(date: NaiveDate) -> CalendarDate {
    CalendarDate::new(date.day(), date.month0(), date.year())
}

fn resolve_slot(date: NaiveDate, location: &GeoCoordinate, utc_offset_minutes: i32) -> SlotResult {
    let result = day_times(&calendar_date(date), location, utc_offset_minutes);
    match &result {
        Ok(times) => debug!(
            %date,
            sunrise = times.sunrise_minutes,
            sunset = times.sunset_minutes,
            "resolved window slot"
        ),
        Err(e) => warn!(%date, error = %e, "no sunrise/sunset for date"),
    }
    result
}

/// Three consecutive days of `DayTimes` centered on `date`.
///
/// Immutable: [`advance_day`](Self::advance_day) and
/// [`realign`](Self::realign) return a new tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWindowTracker {
    date: NaiveDate,
    location: GeoCoordinate,
    utc_offset_minutes: i32,
    yesterday: SlotResult,
    today: SlotResult,
    tomorrow: SlotResult,
}

impl DailyWindowTracker {
    /// Resolve all three slots around `date`.
    pub fn new(date: NaiveDate, location: GeoCoordinate, utc_offset_minutes: i32) -> Self {
        Self {
            date,
            location,
            utc_offset_minutes,
            yesterday: resolve_slot(date - Days::new(1), &location, utc_offset_minutes),
            today: resolve_slot(date, &location, utc_offset_minutes),
            tomorrow: resolve_slot(date + Days::new(1), &location, utc_offset_minutes),
        }
    }

    /// The date of the `today` slot.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> GeoCoordinate {
        self.location
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.utc_offset_minutes
    }

    pub fn yesterday(&self) -> &SlotResult {
        &self.yesterday
    }

    pub fn today(&self) -> &SlotResult {
        &self.today
    }

    pub fn tomorrow(&self) -> &SlotResult {
        &self.tomorrow
    }

    /// Shift the window one day forward, resolving only the new tomorrow.
    pub fn advance_day(&self) -> Self {
        let date = self.date + Days::new(1);
        Self {
            date,
            location: self.location,
            utc_offset_minutes: self.utc_offset_minutes,
            yesterday: self.today.clone(),
            today: self.tomorrow.clone(),
            tomorrow: resolve_slot(date + Days::new(1), &self.location, self.utc_offset_minutes),
        }
    }

    /// Bring the window in line with the wall-clock `date`, `location` and
    /// offset.
    ///
    /// A window that is one day ahead is kept: it was advanced after
    /// sunset and already describes the coming day. One day behind is
    /// advanced; any other mismatch resolves a fresh window.
    pub fn realign(&self, date: NaiveDate, location: GeoCoordinate, utc_offset_minutes: i32) -> Self {
        if location != self.location || utc_offset_minutes != self.utc_offset_minutes {
            debug!("location or offset changed; rebuilding window");
            return Self::new(date, location, utc_offset_minutes);
        }
        let lag_days = date.signed_duration_since(self.date).num_days();
        match lag_days {
            0 | -1 => self.clone(),
            1 => self.advance_day(),
            _ => {
                debug!(window = %self.date, %date, "window out of step; rebuilding");
                Self::new(date, location, utc_offset_minutes)
            }
        }
    }
}
