//! SOS broadcast.
//!
//! Resolves the sender's position (falling back to a fixed coordinate when
//! geolocation fails), dispatches the request through the data source once,
//! and reports the outcome. A failed dispatch is never retried; the caller
//! shows the fallback instruction instead.

use serde::{Deserialize, Serialize};

use crate::logging::{self, Component};
use crate::model::{Coordinates, MarineError, SosRequest};
use crate::source::MarineDataSource;

/// Visakhapatnam harbor, used when no position fix is available.
pub const FALLBACK_COORDINATES: Coordinates = Coordinates { lat: 17.6868, lng: 83.2185 };

pub const DEFAULT_SOS_MESSAGE: &str =
    "EMERGENCY: Immediate assistance required. Fisherman in distress.";

// ---------------------------------------------------------------------------
// Geolocation
// ---------------------------------------------------------------------------

pub trait GeolocationProvider {
    fn current_position(&self) -> Result<Coordinates, MarineError>;
}

/// A position supplied up front, e.g. from the command line.
pub struct FixedPosition(pub Coordinates);

impl GeolocationProvider for FixedPosition {
    fn current_position(&self) -> Result<Coordinates, MarineError> {
        Ok(self.0)
    }
}

/// No positioning available on this device.
pub struct NoGeolocation;

impl GeolocationProvider for NoGeolocation {
    fn current_position(&self) -> Result<Coordinates, MarineError> {
        Err(MarineError::Transport("geolocation unavailable".to_string()))
    }
}

/// Current position, or `fallback` if the provider fails.
pub fn resolve_position(provider: &dyn GeolocationProvider, fallback: Coordinates) -> Coordinates {
    match provider.current_position() {
        Ok(position) => position,
        Err(e) => {
            logging::info(
                Component::Sos,
                None,
                &format!("Geolocation failed ({}), using fallback {}, {}", e, fallback.lat, fallback.lng),
            );
            fallback
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SosSettings {
    /// Number the SOS is addressed to.
    pub contact_number: String,
    /// Number the user should call if dispatch fails.
    pub emergency_number: String,
    pub message: String,
    pub fallback_lat: f64,
    pub fallback_lng: f64,
}

impl Default for SosSettings {
    fn default() -> Self {
        Self {
            contact_number: "+91-9876543210".to_string(),
            emergency_number: "112".to_string(),
            message: DEFAULT_SOS_MESSAGE.to_string(),
            fallback_lat: FALLBACK_COORDINATES.lat,
            fallback_lng: FALLBACK_COORDINATES.lng,
        }
    }
}

impl SosSettings {
    pub fn fallback(&self) -> Coordinates {
        Coordinates { lat: self.fallback_lat, lng: self.fallback_lng }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SosOutcome {
    Sent { alert_id: String, position: Coordinates },
    Failed { reason: String, fallback_instruction: String },
}

impl SosOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SosOutcome::Sent { .. })
    }
}

/// Sends one SOS. `message` overrides the configured text when given.
pub fn send_sos(
    source: &dyn MarineDataSource,
    geolocation: &dyn GeolocationProvider,
    settings: &SosSettings,
    message: Option<&str>,
) -> SosOutcome {
    let failed = |reason: String| SosOutcome::Failed {
        reason,
        fallback_instruction: format!(
            "Failed to send. Please check your connection or call {} directly.",
            settings.emergency_number
        ),
    };

    if settings.contact_number.trim().is_empty() {
        return failed("no SOS contact number configured".to_string());
    }

    let position = resolve_position(geolocation, settings.fallback());
    let request = SosRequest {
        contact_number: settings.contact_number.clone(),
        lat: position.lat,
        lng: position.lng,
        message: message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(settings.message.as_str())
            .to_string(),
    };

    match source.dispatch_sos(&request) {
        Ok(receipt) => {
            logging::info(
                Component::Sos,
                None,
                &format!("SOS {} dispatched to {}", receipt.alert_id, request.contact_number),
            );
            SosOutcome::Sent { alert_id: receipt.alert_id, position }
        }
        Err(e) => {
            logging::error(Component::Sos, None, &format!("SOS dispatch failed: {}", e));
            failed(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
