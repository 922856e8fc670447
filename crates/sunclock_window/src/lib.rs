//! Three-day sunrise/sunset window and the notification loop that feeds a
//! companion device.
//!
//! This crate provides:
//! - `DailyWindowTracker`: yesterday/today/tomorrow `DayTimes` for one
//!   location and UTC offset, advanced explicitly one day at a time
//! - `plan_tick`: the pure scheduling decision (which message to send,
//!   whether to advance, how long to wait)
//! - `SunWatch`: the async loop that fetches a location fix, plans a tick,
//!   delivers the message and sleeps until the next event
//! - `DialLayout`: 24-hour dial geometry derived from a delivered message

pub mod clock;
pub mod dial;
pub mod error;
pub mod location;
pub mod message;
pub mod plan;
pub mod sink;
pub mod tracker;
pub mod watch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dial::{DialLayout, TemporalHour, turn_fraction};
pub use error::WatchError;
pub use location::{FixedLocation, LocationSource};
pub use message::SunTimesMessage;
pub use plan::{DEFAULT_BUFFER_MS, DayPhase, TickPlan, plan_tick};
pub use sink::{JsonLinesSink, LogSink, MessageSink};
pub use tracker::{DailyWindowTracker, SlotResult, calendar_date};
pub use watch::{Control, SunWatch, WatchConfig};
