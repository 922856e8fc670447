//! Pure scheduling decision for one notification tick.
//!
//! Given the window and the local time, decide which sunrise/sunset pair the
//! device should show, whether the window moves forward, and how long to
//! wait before the next tick. Nothing here touches a timer.
//!
//! | local time          | message                         | next tick          |
//! |---------------------|---------------------------------|--------------------|
//! | before sunrise      | today's rise, yesterday's set   | today's sunrise    |
//! | before sunset       | today's rise, today's set       | today's sunset     |
//! | after sunset        | tomorrow's rise, today's set    | tomorrow's sunrise |

use std::time::Duration;

use crate::message::SunTimesMessage;
use crate::tracker::DailyWindowTracker;

/// Milliseconds per minute.
pub const MINUTE_MS: i64 = 60_000;

/// Milliseconds per day.
pub const DAY_MS: i64 = 86_400_000;

/// Slack added after each event so the tick lands just past it.
pub const DEFAULT_BUFFER_MS: i64 = 5_000;

/// Where the local time falls relative to today's events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPhase {
    BeforeSunrise,
    Daylight,
    AfterSunset,
    /// Today has no sunrise/sunset (polar day or night).
    Unresolved,
}

/// Result of planning one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPlan {
    pub phase: DayPhase,
    /// Message to deliver now, `None` when a needed slot is unresolved.
    pub message: Option<SunTimesMessage>,
    /// Whether the window should move to the next day after this tick.
    pub advance_day: bool,
    /// Wait before the next tick.
    pub delay: Duration,
}

fn delay_from_ms(ms: i64) -> Duration {
    Duration::from_millis(ms.max(0) as u64)
}

/// Plan the tick at `now_ms` milliseconds past local midnight of the
/// window's `today`.
///
/// `now_ms` may be negative when the window was already advanced past
/// sunset and the wall clock has not yet reached midnight.
///
/// An unresolved yesterday or tomorrow only suppresses the message; the
/// delay still targets today's sunrise, or local midnight when tomorrow
/// has no sunrise.
pub fn plan_tick(window: &DailyWindowTracker, now_ms: i64, buffer_ms: i64) -> TickPlan {
    let today = match window.today() {
        Ok(t) => *t,
        Err(_) => {
            return TickPlan {
                phase: DayPhase::Unresolved,
                message: None,
                advance_day: false,
                delay: delay_from_ms(DAY_MS - now_ms + buffer_ms),
            };
        }
    };

    let rise_ms = i64::from(today.sunrise_minutes) * MINUTE_MS;
    let set_ms = i64::from(today.sunset_minutes) * MINUTE_MS;

    if now_ms < rise_ms {
        TickPlan {
            phase: DayPhase::BeforeSunrise,
            message: window
                .yesterday()
                .as_ref()
                .ok()
                .map(|yesterday| SunTimesMessage::from_days(&today, yesterday)),
            advance_day: false,
            delay: delay_from_ms(rise_ms - now_ms + buffer_ms),
        }
    } else if now_ms < set_ms {
        TickPlan {
            phase: DayPhase::Daylight,
            message: Some(SunTimesMessage::from_days(&today, &today)),
            advance_day: false,
            delay: delay_from_ms(set_ms - now_ms + buffer_ms),
        }
    } else {
        let tomorrow = window.tomorrow().as_ref().ok();
        // Measured from tomorrow's midnight, i.e. the advanced window.
        let until_midnight = DAY_MS - now_ms;
        let delay_ms = match tomorrow {
            Some(t) => until_midnight + i64::from(t.sunrise_minutes) * MINUTE_MS + buffer_ms,
            None => until_midnight + buffer_ms,
        };
        TickPlan {
            phase: DayPhase::AfterSunset,
            message: tomorrow.map(|t| SunTimesMessage::from_days(t, &today)),
            advance_day: true,
            delay: delay_from_ms(delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sunclock_solar::GeoCoordinate;

    fn window() -> DailyWindowTracker {
        let loc = GeoCoordinate::new(51.4769, -0.0005).unwrap();
        DailyWindowTracker::new(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(), loc, 0)
    }

    fn minutes(m: i64) -> i64 {
        m * MINUTE_MS
    }

    #[test]
    fn before_sunrise_shows_yesterdays_sunset() {
        let w = window();
        let today = *w.today().as_ref().unwrap();
        let yesterday = *w.yesterday().as_ref().unwrap();
        let now = minutes(today.sunrise_minutes as i64 - 30);

        let plan = plan_tick(&w, now, DEFAULT_BUFFER_MS);
        assert_eq!(plan.phase, DayPhase::BeforeSunrise);
        assert_eq!(
            plan.message,
            Some(SunTimesMessage::new(today.sunrise_minutes, yesterday.sunset_minutes))
        );
        assert!(!plan.advance_day);
        assert_eq!(plan.delay, Duration::from_millis(30 * 60_000 + 5_000));
    }

    #[test]
    fn daylight_shows_today() {
        let w = window();
        let today = *w.today().as_ref().unwrap();
        let now = minutes(12 * 60);

        let plan = plan_tick(&w, now, DEFAULT_BUFFER_MS);
        assert_eq!(plan.phase, DayPhase::Daylight);
        assert_eq!(
            plan.message,
            Some(SunTimesMessage::new(today.sunrise_minutes, today.sunset_minutes))
        );
        let expected = minutes(today.sunset_minutes as i64) - now + DEFAULT_BUFFER_MS;
        assert_eq!(plan.delay, Duration::from_millis(expected as u64));
    }

    #[test]
    fn exactly_at_sunrise_is_daylight() {
        let w = window();
        let today = *w.today().as_ref().unwrap();
        let plan = plan_tick(&w, minutes(today.sunrise_minutes as i64), 0);
        assert_eq!(plan.phase, DayPhase::Daylight);
    }

    #[test]
    fn after_sunset_advances_and_waits_for_tomorrow() {
        let w = window();
        let today = *w.today().as_ref().unwrap();
        let tomorrow = *w.tomorrow().as_ref().unwrap();
        let now = minutes(22 * 60);

        let plan = plan_tick(&w, now, DEFAULT_BUFFER_MS);
        assert_eq!(plan.phase, DayPhase::AfterSunset);
        assert!(plan.advance_day);
        assert_eq!(
            plan.message,
            Some(SunTimesMessage::new(tomorrow.sunrise_minutes, today.sunset_minutes))
        );
        let expected = minutes(2 * 60) + minutes(tomorrow.sunrise_minutes as i64) + 5_000;
        assert_eq!(plan.delay, Duration::from_millis(expected as u64));
    }

    #[test]
    fn advanced_window_before_midnight_targets_sunrise() {
        // After the sunset tick the window is one day ahead; 22:00 on the
        // previous day is -2h relative to the new today.
        let w = window().advance_day();
        let today = *w.today().as_ref().unwrap();
        let plan = plan_tick(&w, -minutes(2 * 60), DEFAULT_BUFFER_MS);
        assert_eq!(plan.phase, DayPhase::BeforeSunrise);
        let expected = minutes(2 * 60) + minutes(today.sunrise_minutes as i64) + 5_000;
        assert_eq!(plan.delay, Duration::from_millis(expected as u64));
    }

    #[test]
    fn polar_today_suppresses_message() {
        let svalbard = GeoCoordinate::new(80.0, 15.0).unwrap();
        let w = DailyWindowTracker::new(NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(), svalbard, 60);
        let plan = plan_tick(&w, minutes(10 * 60), DEFAULT_BUFFER_MS);
        assert_eq!(plan.phase, DayPhase::Unresolved);
        assert_eq!(plan.message, None);
        assert!(!plan.advance_day);
        assert_eq!(
            plan.delay,
            Duration::from_millis((minutes(14 * 60) + 5_000) as u64)
        );
    }

    fn arctic_window(y: i32, m: u32, d: u32) -> DailyWindowTracker {
        // Abisko area: the sun stops rising on Dec 12 and returns on Jan 1
        let loc = GeoCoordinate::new(67.8, 20.0).unwrap();
        DailyWindowTracker::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), loc, 60)
    }

    #[test]
    fn unresolved_tomorrow_waits_for_midnight() {
        let w = arctic_window(2024, 12, 11);
        assert!(w.today().is_ok());
        assert!(w.tomorrow().is_err());

        let plan = plan_tick(&w, minutes(22 * 60), DEFAULT_BUFFER_MS);
        assert_eq!(plan.phase, DayPhase::AfterSunset);
        assert_eq!(plan.message, None);
        assert!(plan.advance_day);
        assert_eq!(
            plan.delay,
            Duration::from_millis((minutes(2 * 60) + 5_000) as u64)
        );
    }

    #[test]
    fn unresolved_yesterday_still_waits_for_sunrise() {
        let w = arctic_window(2025, 1, 1);
        assert!(w.yesterday().is_err());
        let today = *w.today().as_ref().unwrap();

        let now = minutes(5 * 60);
        let plan = plan_tick(&w, now, DEFAULT_BUFFER_MS);
        assert_eq!(plan.phase, DayPhase::BeforeSunrise);
        assert_eq!(plan.message, None);
        assert!(!plan.advance_day);
        let expected = minutes(today.sunrise_minutes as i64) - now + 5_000;
        assert_eq!(plan.delay, Duration::from_millis(expected as u64));
    }

    #[test]
    fn delay_never_negative() {
        let w = window();
        let plan = plan_tick(&w, minutes(12 * 60), -DAY_MS);
        assert_eq!(plan.delay, Duration::ZERO);
    }

    #[test]
    fn deterministic() {
        let w = window();
        assert_eq!(
            plan_tick(&w, 1_234_567, DEFAULT_BUFFER_MS),
            plan_tick(&w, 1_234_567, DEFAULT_BUFFER_MS)
        );
    }
}
