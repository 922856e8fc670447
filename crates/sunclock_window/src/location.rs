//! Location fix sources.

use std::future::Future;

use sunclock_solar::GeoCoordinate;

use crate::error::WatchError;

/// Asynchronous provider of the observer's current position.
///
/// Longitude is east positive, as reported by a positioning service.
pub trait LocationSource {
    fn current_fix(&mut self) -> impl Future<Output = Result<GeoCoordinate, WatchError>> + Send;
}

/// A location that never changes, e.g. from a configuration file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocation(pub GeoCoordinate);

impl LocationSource for FixedLocation {
    async fn current_fix(&mut self) -> Result<GeoCoordinate, WatchError> {
        Ok(self.0)
    }
}
