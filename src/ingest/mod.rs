/// Upstream data ingestion.
///
/// Submodules:
/// - `weatherapi`: live conditions, marine data, and forecasts from WeatherAPI.com.
/// - `dashboard`:  client for a remote SeaSafe dashboard backend.

pub mod dashboard;
pub mod weatherapi;
