//! One-shot subcommands that print to stdout.

use anyhow::{Context, Result, bail};
use chrono::Timelike;
use sunclock_solar::{DayTimes, GeoCoordinate, SolarParameters, day_times};
use sunclock_time::{CalendarDate, julian_century};
use sunclock_window::{
    DEFAULT_BUFFER_MS, DailyWindowTracker, DialLayout, SlotResult, SunTimesMessage, plan_tick,
    turn_fraction,
};

use crate::cli::{DialArgs, PlaceArgs, SolarArgs, TimesArgs, WindowArgs};

const DAY_MINUTES: i32 = 24 * 60;

/// `HH:MM`, noting when the value spills into a neighbouring day.
pub fn format_minutes(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(DAY_MINUTES);
    let hhmm = format!("{:02}:{:02}", wrapped / 60, wrapped % 60);
    match minutes.div_euclid(DAY_MINUTES) {
        0 => hhmm,
        d if d < 0 => format!("{hhmm} (previous day)"),
        _ => format!("{hhmm} (next day)"),
    }
}

fn format_length(minutes: i32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

fn format_slot(slot: &SlotResult) -> String {
    match slot {
        Ok(t) => format!(
            "rise {}  set {}",
            format_minutes(t.sunrise_minutes),
            format_minutes(t.sunset_minutes)
        ),
        Err(e) => e.to_string(),
    }
}

impl PlaceArgs {
    fn coordinate(&self) -> Result<GeoCoordinate> {
        GeoCoordinate::new(self.lat, self.lon).context("invalid location")
    }
}

pub fn julian_day(date: &CalendarDate) -> Result<()> {
    let jd = date.julian_day();
    println!("Date:            {date}");
    println!("Julian Day:      {jd:.1}");
    println!("Julian century:  {:.9}", julian_century(jd));
    Ok(())
}

pub fn solar(args: &SolarArgs) -> Result<()> {
    let jd = match (args.jd, &args.date) {
        (Some(jd), _) => jd,
        (None, Some(date)) => date.julian_day(),
        (None, None) => bail!("either --date or --jd is required"),
    };
    let p = SolarParameters::at(julian_century(jd)).context("solar position failed")?;
    println!("JD:                        {jd:.6}");
    println!("T (centuries):             {:.9}", p.t);
    println!("Mean longitude L0:         {:.6} deg", p.geom_mean_longitude_deg);
    println!("Mean anomaly M:            {:.6} deg", p.geom_mean_anomaly_deg);
    println!("Eccentricity e:            {:.9}", p.eccentricity);
    println!("Equation of center C:      {:.6} deg", p.equation_of_center_deg);
    println!("True longitude:            {:.6} deg", p.true_longitude_deg);
    println!("Apparent longitude:        {:.6} deg", p.apparent_longitude_deg);
    println!("Mean obliquity:            {:.6} deg", p.mean_obliquity_deg);
    println!("Corrected obliquity:       {:.6} deg", p.corrected_obliquity_deg);
    println!("Declination:               {:.6} deg", p.declination_deg);
    println!("Equation of time:          {:.4} min", p.equation_of_time_min);
    Ok(())
}

pub fn times(args: &TimesArgs) -> Result<()> {
    let location = args.place.coordinate()?;
    let t: DayTimes = day_times(&args.date, &location, args.place.utc_offset)
        .with_context(|| format!("no sunrise/sunset on {}", args.date))?;
    println!("Date:        {}", args.date);
    println!("Location:    {:.4}, {:.4}", location.latitude_deg, location.longitude_deg);
    println!("UTC offset:  {:+} min", args.place.utc_offset);
    println!("Sunrise:     {}", format_minutes(t.sunrise_minutes));
    println!("Sunset:      {}", format_minutes(t.sunset_minutes));
    println!("Day length:  {}", format_length(t.day_length_minutes()));
    Ok(())
}

pub fn window(args: &WindowArgs) -> Result<()> {
    let location = args.place.coordinate()?;
    let window = DailyWindowTracker::new(args.date, location, args.place.utc_offset);
    let slots = [
        ("Yesterday", args.date.pred_opt(), window.yesterday()),
        ("Today", Some(args.date), window.today()),
        ("Tomorrow", args.date.succ_opt(), window.tomorrow()),
    ];
    for (label, date, slot) in slots {
        let date = date.map(|d| d.to_string()).unwrap_or_default();
        println!("{label:<10} {date:<10}  {}", format_slot(slot));
    }

    let Some(time) = args.time else {
        return Ok(());
    };
    let now_ms = i64::from(time.num_seconds_from_midnight()) * 1000;
    let plan = plan_tick(&window, now_ms, DEFAULT_BUFFER_MS);
    match (&plan.message, args.json) {
        (Some(message), true) => println!("{}", serde_json::to_string(message)?),
        (Some(SunTimesMessage { rise_minutes, set_minutes }), false) => println!(
            "At {}: {:?}, send rise {} set {}",
            time.format("%H:%M"),
            plan.phase,
            format_minutes(*rise_minutes),
            format_minutes(*set_minutes)
        ),
        (None, _) => println!("At {}: {:?}, no message", time.format("%H:%M"), plan.phase),
    }
    if !args.json {
        println!(
            "Next tick in {}{}",
            format_length((plan.delay.as_secs() / 60) as i32),
            if plan.advance_day { ", window advances" } else { "" }
        );
    }
    Ok(())
}

pub fn dial(args: &DialArgs) -> Result<()> {
    let Some(layout) = DialLayout::from_message(&SunTimesMessage::new(args.rise, args.set)) else {
        bail!("sunrise and sunset must both be non-zero");
    };
    println!("Day:    {}", format_length(layout.day_minutes()));
    println!("Night:  {}", format_length(layout.night_minutes()));
    println!("Hour  Day mark        Night mark");
    for (i, (day, night)) in layout.day_marks().iter().zip(layout.night_marks()).enumerate() {
        println!(
            "{:>4}  {} ({:.3})  {} ({:.3})",
            i + 1,
            format_minutes(day.floor() as i32),
            turn_fraction(*day),
            format_minutes(night.floor() as i32),
            turn_fraction(night)
        );
    }
    if let Some(time) = args.time {
        let minute = f64::from(time.num_seconds_from_midnight()) / 60.0;
        println!(
            "At {}: hand at {:.3} turn, {:?}",
            time.format("%H:%M"),
            turn_fraction(minute),
            layout.temporal_hour(minute)
        );
    }
    Ok(())
}
