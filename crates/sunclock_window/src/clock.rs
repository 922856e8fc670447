//! Wall-clock sources.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, FixedOffset, Local, TimeDelta};

/// Source of the current local date-time and its UTC offset.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The operating system clock in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl ManualClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock().unwrap_or_else(|p| p.into_inner()) = now;
    }

    pub fn advance(&self, by: TimeDelta) {
        let mut guard = self.now.lock().unwrap_or_else(|p| p.into_inner());
        *guard += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(|p| p.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_shared_between_clones() {
        let t0 = DateTime::parse_from_rfc3339("2024-03-20T12:00:00+01:00").unwrap();
        let clock = ManualClock::new(t0);
        let other = clock.clone();
        other.advance(TimeDelta::hours(2));
        assert_eq!(clock.now(), t0 + TimeDelta::hours(2));
        clock.set(t0);
        assert_eq!(other.now(), t0);
    }

    #[test]
    fn system_clock_has_offset() {
        let now = SystemClock.now();
        assert!(now.offset().local_minus_utc().abs() <= 14 * 3600);
    }
}
