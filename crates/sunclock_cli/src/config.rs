use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use sunclock_window::{DEFAULT_BUFFER_MS, WatchConfig};

/// Top-level `sunclock.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SunclockConfig {
    /// Fixed observer position.
    #[serde(default)]
    pub location: Option<LocationToml>,

    /// Loop timing.
    #[serde(default)]
    pub schedule: ScheduleToml,

    /// Message output.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub latitude: f64,
    /// East positive.
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_buffer_ms")]
    pub buffer_ms: i64,
    #[serde(default = "default_retry_after_secs")]
    pub retry_after_secs: u64,
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            buffer_ms: default_buffer_ms(),
            retry_after_secs: default_retry_after_secs(),
            utc_offset_minutes: None,
        }
    }
}

fn default_buffer_ms() -> i64 {
    DEFAULT_BUFFER_MS
}
fn default_retry_after_secs() -> u64 {
    60
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Messages as tracing events.
    #[default]
    Log,
    /// One JSON object per line on stdout.
    Json,
}

impl SunclockConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    pub fn watch_config(&self) -> WatchConfig {
        WatchConfig {
            buffer_ms: self.schedule.buffer_ms,
            retry_after: Duration::from_secs(self.schedule.retry_after_secs),
            utc_offset_minutes: self.schedule.utc_offset_minutes,
        }
    }
}
