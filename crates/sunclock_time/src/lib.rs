//! Calendar and Julian Day primitives.
//!
//! This crate provides:
//! - `julian_day`: calendar fields (zero-based day and month) to Julian Day
//! - `julian_century`: Julian Day to Julian centuries since J2000.0
//! - `CalendarDate`: an immutable civil date as supplied by a wall clock

pub mod calendar;
pub mod julian;

pub use calendar::CalendarDate;
pub use julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD, julian_century, julian_day};
