//! The notification loop.
//!
//! One task owns the window, a single pending sleep and a control channel.
//! Each tick fetches a location fix, realigns the window with the wall
//! clock, plans the next event and delivers at most one message.

use std::time::Duration;

use chrono::{NaiveTime, TimeDelta, Timelike};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::error::WatchError;
use crate::location::LocationSource;
use crate::plan::{DAY_MS, DEFAULT_BUFFER_MS, TickPlan, plan_tick};
use crate::sink::MessageSink;
use crate::tracker::DailyWindowTracker;

/// Commands accepted by [`SunWatch::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Cancel the pending sleep and tick now.
    Refresh,
    /// End the loop.
    Stop,
}

/// Loop settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchConfig {
    /// Slack added after each event, milliseconds.
    pub buffer_ms: i64,
    /// Wait before retrying after a failed tick.
    pub retry_after: Duration,
    /// Fixed UTC offset in minutes; `None` uses the clock's offset.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            buffer_ms: DEFAULT_BUFFER_MS,
            retry_after: Duration::from_secs(60),
            utc_offset_minutes: None,
        }
    }
}

fn millis_since_midnight(time: NaiveTime) -> i64 {
    // leap seconds report nanos above 1e9
    let millis = (time.nanosecond() / 1_000_000).min(999);
    i64::from(time.num_seconds_from_midnight()) * 1000 + i64::from(millis)
}

/// Sunrise/sunset watcher feeding a [`MessageSink`].
#[derive(Debug)]
pub struct SunWatch<L, S, C> {
    location: L,
    sink: S,
    clock: C,
    config: WatchConfig,
    window: Option<DailyWindowTracker>,
}

impl<L, S, C> SunWatch<L, S, C>
where
    L: LocationSource,
    S: MessageSink,
    C: Clock,
{
    pub fn new(location: L, sink: S, clock: C, config: WatchConfig) -> Self {
        Self {
            location,
            sink,
            clock,
            config,
            window: None,
        }
    }

    /// The current window, once the first tick has resolved one.
    pub fn window(&self) -> Option<&DailyWindowTracker> {
        self.window.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Run one tick and return its plan.
    ///
    /// Delivery failures are logged and do not fail the tick; the window
    /// still moves on.
    ///
    /// # Errors
    /// [`WatchError::Location`] (or whatever the source reports) when no
    /// location fix is available. The window is left untouched.
    pub async fn tick(&mut self) -> Result<TickPlan, WatchError> {
        let location = self.location.current_fix().await?;
        let now = self.clock.now();
        let offset_minutes = self
            .config
            .utc_offset_minutes
            .unwrap_or_else(|| now.offset().local_minus_utc() / 60);
        let local = now.naive_utc() + TimeDelta::minutes(i64::from(offset_minutes));

        let window = match &self.window {
            Some(w) => w.realign(local.date(), location, offset_minutes),
            None => DailyWindowTracker::new(local.date(), location, offset_minutes),
        };
        let day_lag = local.date().signed_duration_since(window.date()).num_days();
        let now_ms = day_lag * DAY_MS + millis_since_midnight(local.time());

        let plan = plan_tick(&window, now_ms, self.config.buffer_ms);
        debug!(phase = ?plan.phase, now_ms, window = %window.date(), "planned tick");

        match &plan.message {
            Some(message) => {
                if let Err(e) = self.sink.send(message) {
                    warn!(error = %e, "message delivery failed");
                }
            }
            None => warn!(window = %window.date(), "no sunrise/sunset; message suppressed"),
        }

        self.window = Some(if plan.advance_day {
            window.advance_day()
        } else {
            window
        });
        info!(delay_secs = plan.delay.as_secs(), "next tick scheduled");
        Ok(plan)
    }

    /// Tick, sleep until the planned delay, repeat.
    ///
    /// A failed tick is retried after [`WatchConfig::retry_after`]. Returns
    /// on [`Control::Stop`] or when every sender has been dropped.
    pub async fn run(&mut self, mut control: mpsc::Receiver<Control>) {
        loop {
            let delay = match self.tick().await {
                Ok(plan) => plan.delay,
                Err(e) => {
                    warn!(error = %e, retry_secs = self.config.retry_after.as_secs(), "tick failed");
                    self.config.retry_after
                }
            };

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                command = control.recv() => match command {
                    Some(Control::Refresh) => debug!("refresh requested"),
                    Some(Control::Stop) | None => {
                        info!("watch stopped");
                        return;
                    }
                },
            }
        }
    }
}
