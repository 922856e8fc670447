use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{ArgGroup, Parser, Subcommand};
use sunclock_time::CalendarDate;

/// Sunrise/sunset calculator and 24-hour sun dial feed.
#[derive(Parser)]
#[command(name = "sunclock", version, about = "Sunrise/sunset times and a 24-hour sun dial feed")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Julian Day and Julian century at 0h UT of a date
    JulianDay {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: CalendarDate,
    },
    /// Solar position parameters
    Solar(SolarArgs),
    /// Local sunrise and sunset for a date and place
    Times(TimesArgs),
    /// Yesterday/today/tomorrow window and the message due at a local time
    Window(WindowArgs),
    /// Dial hour marks for a sunrise/sunset pair
    Dial(DialArgs),
    /// Run the notification loop until interrupted
    Watch(WatchArgs),
}

/// Observer position and fixed UTC offset.
#[derive(clap::Args)]
pub struct PlaceArgs {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,
    /// UTC offset in minutes (e.g. 60 for CET, -300 for EST)
    #[arg(long = "utc-offset", default_value_t = 0, allow_negative_numbers = true)]
    pub utc_offset: i32,
}

#[derive(clap::Args)]
#[command(group(ArgGroup::new("instant").required(true).args(["date", "jd"])))]
pub struct SolarArgs {
    /// Calendar date (YYYY-MM-DD), evaluated at 0h UT
    #[arg(long)]
    pub date: Option<CalendarDate>,
    /// Julian Day
    #[arg(long)]
    pub jd: Option<f64>,
}

#[derive(clap::Args)]
pub struct TimesArgs {
    /// Calendar date (YYYY-MM-DD)
    #[arg(long)]
    pub date: CalendarDate,
    #[command(flatten)]
    pub place: PlaceArgs,
}

#[derive(clap::Args)]
pub struct WindowArgs {
    /// Date of the window's today (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,
    /// Local time of day (HH:MM) to plan a tick for
    #[arg(long, value_parser = parse_hhmm)]
    pub time: Option<NaiveTime>,
    /// Print the planned message as JSON
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub place: PlaceArgs,
}

#[derive(clap::Args)]
pub struct DialArgs {
    /// Sunrise, local minutes past midnight
    #[arg(long, allow_negative_numbers = true)]
    pub rise: i32,
    /// Sunset, local minutes past midnight
    #[arg(long, allow_negative_numbers = true)]
    pub set: i32,
    /// Local time of day (HH:MM) to locate on the dial
    #[arg(long, value_parser = parse_hhmm)]
    pub time: Option<NaiveTime>,
}

#[derive(clap::Args)]
pub struct WatchArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override latitude from config
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,
    /// Override longitude from config
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,
    /// Override UTC offset (minutes) from config
    #[arg(long = "utc-offset", allow_negative_numbers = true)]
    pub utc_offset: Option<i32>,
    /// Emit messages as JSON lines on stdout
    #[arg(long)]
    pub json: bool,
}

fn parse_hhmm(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}
