use anyhow::{Context, Result, bail};
use sunclock_solar::GeoCoordinate;
use sunclock_window::{Control, FixedLocation, JsonLinesSink, LogSink, SunWatch, SystemClock};
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::WatchArgs;
use crate::config::{LocationToml, OutputFormat, SunclockConfig};

/// Command-line position overrides win over the config file.
fn resolve_location(
    lat: Option<f64>,
    lon: Option<f64>,
    configured: Option<&LocationToml>,
) -> Result<GeoCoordinate> {
    let lat = lat.or(configured.map(|l| l.latitude));
    let lon = lon.or(configured.map(|l| l.longitude));
    let (Some(lat), Some(lon)) = (lat, lon) else {
        bail!("no location: set [location] in config or use --lat/--lon");
    };
    GeoCoordinate::new(lat, lon).context("invalid location")
}

/// Run the notification loop until Ctrl-C.
pub fn run(args: &WatchArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => SunclockConfig::load(path)?,
        None => SunclockConfig::default(),
    };
    let location = resolve_location(args.lat, args.lon, config.location.as_ref())?;
    let mut watch_config = config.watch_config();
    if args.utc_offset.is_some() {
        watch_config.utc_offset_minutes = args.utc_offset;
    }
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    info!(
        latitude = location.latitude_deg,
        longitude = location.longitude_deg,
        ?format,
        "starting watch"
    );

    let rt = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    rt.block_on(async move {
        let (tx, rx) = mpsc::channel(4);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = tx.send(Control::Stop).await;
            }
        });

        let source = FixedLocation(location);
        match format {
            OutputFormat::Log => {
                let mut watch = SunWatch::new(source, LogSink, SystemClock, watch_config);
                watch.run(rx).await;
            }
            OutputFormat::Json => {
                let sink = JsonLinesSink::new(std::io::stdout());
                let mut watch = SunWatch::new(source, sink, SystemClock, watch_config);
                watch.run(rx).await;
            }
        }
    });
    Ok(())
}
