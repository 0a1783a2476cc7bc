/// Core data types for the SeaSafe marine conditions service.
///
/// This module defines the shared domain model imported by all other modules:
/// the wire shape of a station reading, history snapshots, SOS requests, the
/// device-local user session, and the crate error type.
///
/// Safety status is deliberately absent from `LocationReading`. It is derived
/// on demand by `alert::status::classify` so it can never drift from the
/// metrics that produced it.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Safety status
// ---------------------------------------------------------------------------

/// Go / no-go classification, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyStatus {
    #[serde(alias = "SAFE TO GO")]
    SafeToGo,
    #[serde(alias = "Caution")]
    Caution,
    #[serde(alias = "DO NOT GO")]
    DoNotGo,
}

impl SafetyStatus {
    /// Stable token used on the wire and in logs.
    pub fn token(&self) -> &'static str {
        match self {
            SafetyStatus::SafeToGo => "SAFE_TO_GO",
            SafetyStatus::Caution => "CAUTION",
            SafetyStatus::DoNotGo => "DO_NOT_GO",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafetyStatus::SafeToGo => write!(f, "SAFE TO GO"),
            SafetyStatus::Caution => write!(f, "CAUTION"),
            SafetyStatus::DoNotGo => write!(f, "DO NOT GO"),
        }
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A geographic position in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// One day of the upstream 14-day forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub maxtemp_c: Option<f64>,
    pub mintemp_c: Option<f64>,
    pub condition: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub daily_chance_of_rain: u8,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

/// A weather alert published by the upstream provider for a location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherAlert {
    #[serde(default)]
    pub headline: String,
    pub severity: Option<String>,
    pub event: Option<String>,
    pub effective: Option<String>,
    pub expires: Option<String>,
    pub desc: Option<String>,
    pub instruction: Option<String>,
}

/// Current conditions at a single coastal station.
///
/// Mirrors the camelCase JSON served by the dashboard API. Any `status`
/// field present on the wire is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationReading {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// Significant wave height, meters.
    pub wave_height: f64,
    /// Sustained wind speed, km/h.
    pub wind_speed: f64,
    /// Sea surface temperature, °C.
    pub sea_temperature: f64,
    /// Visibility, nautical miles.
    pub visibility: f64,
    /// Sea level pressure, hPa.
    pub pressure: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Tide level, meters.
    pub tide: f64,
    #[serde(default)]
    pub wind_direction: f64,
    #[serde(default)]
    pub wave_direction: f64,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    /// Location-specific advisory supplied upstream, may be blank.
    #[serde(default)]
    pub advisory: String,
    /// US EPA air quality index (1-6).
    pub aqi: Option<u8>,
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
    #[serde(default, rename = "forecast14")]
    pub forecast: Vec<ForecastDay>,
}

impl LocationReading {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates { lat: self.lat, lng: self.lng }
    }

    /// Rejects readings the classifier must never see.
    ///
    /// Wave height and wind speed must be finite and non-negative, directions
    /// must lie in [0, 360), and the position must be a valid lat/lng pair.
    pub fn validate(&self) -> Result<(), MarineError> {
        let invalid = |reason: String| MarineError::InvalidReading {
            location: self.id.clone(),
            reason,
        };

        for (field, value) in [
            ("waveHeight", self.wave_height),
            ("windSpeed", self.wind_speed),
            ("visibility", self.visibility),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{} must be a non-negative number, got {}", field, value)));
            }
        }

        for (field, value) in [
            ("windDirection", self.wind_direction),
            ("waveDirection", self.wave_direction),
        ] {
            if !(0.0..360.0).contains(&value) {
                return Err(invalid(format!("{} must be within 0-359 degrees, got {}", field, value)));
            }
        }

        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lng) {
            return Err(invalid(format!("position ({}, {}) is out of range", self.lat, self.lng)));
        }

        Ok(())
    }
}

/// A timestamped metric snapshot from the history log.
///
/// Unlike `LocationReading`, history records the status label that was
/// current when the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub date: String,  // ISO 8601, with or without offset
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub wave_height: f64,
    pub wind_speed: f64,
    pub sea_temperature: f64,
    pub status: SafetyStatus,
}

impl HistoryEntry {
    /// Parses `date` as RFC 3339, falling back to a naive timestamp read as UTC.
    pub fn timestamp(&self) -> Result<chrono::DateTime<chrono::Utc>, MarineError> {
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&self.date) {
            return Ok(dt.with_timezone(&chrono::Utc));
        }
        chrono::NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|e| MarineError::ParseError(format!("history date '{}': {}", self.date, e)))
    }
}

// ---------------------------------------------------------------------------
// SOS types
// ---------------------------------------------------------------------------

/// Body of an SOS dispatch request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SosRequest {
    pub contact_number: String,
    pub lat: f64,
    pub lng: f64,
    pub message: String,
}

/// Acknowledgement returned by a successful SOS dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosReceipt {
    pub status: String,
    pub alert_id: String,
}

// ---------------------------------------------------------------------------
// Session types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The locally persisted user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub location: Option<String>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching, validating, or persisting marine data.
#[derive(Debug, PartialEq)]
pub enum MarineError {
    /// Non-2xx HTTP response from an upstream API.
    HttpError(u16),
    /// The request never produced a response (DNS, connect, timeout).
    Transport(String),
    /// The response body could not be deserialized.
    ParseError(String),
    /// No station with the requested id.
    LocationNotFound(String),
    /// A reading failed caller-side validation.
    InvalidReading { location: String, reason: String },
    /// The local key-value store could not be read or written.
    Store(String),
    /// Configuration file or environment was invalid.
    Config(String),
    /// Login was attempted without the required fields.
    MissingCredentials,
}

impl std::fmt::Display for MarineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarineError::HttpError(code) => write!(f, "HTTP error: {}", code),
            MarineError::Transport(msg) => write!(f, "Transport error: {}", msg),
            MarineError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            MarineError::LocationNotFound(id) => write!(f, "Location not found: {}", id),
            MarineError::InvalidReading { location, reason } => {
                write!(f, "Invalid reading for {}: {}", location, reason)
            }
            MarineError::Store(msg) => write!(f, "Store error: {}", msg),
            MarineError::Config(msg) => write!(f, "Config error: {}", msg),
            MarineError::MissingCredentials => write!(f, "Name and phone are required to log in"),
        }
    }
}

impl std::error::Error for MarineError {}

impl From<reqwest::Error> for MarineError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            MarineError::HttpError(status.as_u16())
        } else if err.is_decode() {
            MarineError::ParseError(err.to_string())
        } else {
            MarineError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for MarineError {
    fn from(err: serde_json::Error) -> Self {
        MarineError::ParseError(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
