//! Data source abstraction.
//!
//! `MarineDataSource` is the contract every consumer codes against: station
//! list, single lookup, history log, and SOS dispatch. Two implementations
//! exist: `ingest::dashboard::DashboardClient` for a remote backend, and
//! `RegistrySource` here, which serves the station registry, enriched with
//! live WeatherAPI data when a key is configured.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::alert::status::{classify_with, ClassificationThresholds};
use crate::ingest::weatherapi;
use crate::logging::{self, Component};
use crate::model::{HistoryEntry, LocationReading, MarineError, SosReceipt, SosRequest};
use crate::stations::{find_station, STATION_REGISTRY};

/// Number of entries in the synthesized history log.
pub const HISTORY_LENGTH: usize = 20;

pub trait MarineDataSource {
    fn locations(&self) -> Result<Vec<LocationReading>, MarineError>;
    fn location(&self, id: &str) -> Result<LocationReading, MarineError>;
    fn history(&self) -> Result<Vec<HistoryEntry>, MarineError>;
    fn dispatch_sos(&self, request: &SosRequest) -> Result<SosReceipt, MarineError>;
}

/// An SOS accepted by `RegistrySource`.
#[derive(Debug, Clone, PartialEq)]
pub struct SosRecord {
    pub alert_id: String,
    pub request: SosRequest,
    pub timestamp: DateTime<Utc>,
}

/// Registry-backed data source.
///
/// SOS requests are not forwarded anywhere; they are logged as a mock SMS
/// and kept in memory for the lifetime of the source.
pub struct RegistrySource {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    thresholds: ClassificationThresholds,
    dispatched: Mutex<Vec<SosRecord>>,
}

impl RegistrySource {
    /// Baseline values only, no network access.
    pub fn offline() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: None,
            thresholds: ClassificationThresholds::default(),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Enriches baselines from WeatherAPI when `api_key` is set.
    pub fn new(
        api_key: Option<String>,
        timeout: Duration,
        thresholds: ClassificationThresholds,
    ) -> Result<Self, MarineError> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            thresholds,
            dispatched: Mutex::new(Vec::new()),
        })
    }

    /// SOS requests accepted so far, oldest first.
    pub fn dispatched(&self) -> Vec<SosRecord> {
        self.dispatched
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// History as of `now`. One entry per day going back, walking the
    /// registry in order, with a small deterministic wobble on the metrics.
    pub fn history_at(&self, now: DateTime<Utc>) -> Vec<HistoryEntry> {
        (0..HISTORY_LENGTH)
            .map(|i| {
                let station = &STATION_REGISTRY[i % STATION_REGISTRY.len()];
                let mut reading = station.baseline_reading();
                reading.wave_height += (i as f64 * 0.1) % 0.5;
                reading.wind_speed += (i % 5) as f64;
                reading.sea_temperature -= (i as f64 * 0.05) % 0.5;

                HistoryEntry {
                    id: format!("hist_{}", i),
                    date: (now - chrono::Duration::days(i as i64)).to_rfc3339(),
                    location: reading.name.clone(),
                    lat: reading.lat,
                    lng: reading.lng,
                    wave_height: reading.wave_height,
                    wind_speed: reading.wind_speed,
                    sea_temperature: reading.sea_temperature,
                    status: classify_with(&reading, &self.thresholds).status,
                }
            })
            .collect()
    }
}

impl MarineDataSource for RegistrySource {
    fn locations(&self) -> Result<Vec<LocationReading>, MarineError> {
        let readings: Vec<_> = STATION_REGISTRY
            .iter()
            .map(|station| {
                weatherapi::live_or_baseline(
                    &self.client,
                    self.api_key.as_deref(),
                    &station.baseline_reading(),
                )
            })
            .collect();
        logging::debug(
            Component::WeatherApi,
            None,
            &format!("Loaded {} stations", readings.len()),
        );
        Ok(readings)
    }

    fn location(&self, id: &str) -> Result<LocationReading, MarineError> {
        let station = find_station(id).ok_or_else(|| MarineError::LocationNotFound(id.to_string()))?;
        Ok(weatherapi::live_or_baseline(
            &self.client,
            self.api_key.as_deref(),
            &station.baseline_reading(),
        ))
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, MarineError> {
        Ok(self.history_at(Utc::now()))
    }

    fn dispatch_sos(&self, request: &SosRequest) -> Result<SosReceipt, MarineError> {
        let mut records = self
            .dispatched
            .lock()
            .map_err(|_| MarineError::Store("SOS log lock poisoned".to_string()))?;

        let timestamp = Utc::now();
        let alert_id = format!("sos_{}_{}", timestamp.format("%Y%m%d%H%M%S"), records.len() + 1);

        logging::warn(
            Component::Sos,
            None,
            &format!(
                "[MOCK SMS] to {} | Lat {}, Lng {} | {}",
                request.contact_number, request.lat, request.lng, request.message
            ),
        );

        records.push(SosRecord {
            alert_id: alert_id.clone(),
            request: request.clone(),
            timestamp,
        });

        Ok(SosReceipt {
            status: "success".to_string(),
            alert_id,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
