//! Wind and wave threshold alerts.
//!
//! Alert deduplication lives here too: each alert kind fires at most once per
//! location while the metric stays above its threshold. The suppression state
//! is owned by the caller's view and passed in and out explicitly, so
//! `evaluate_alerts` stays a pure state transition.

use serde::{Deserialize, Serialize};

/// Alert limits and re-arm policy. A metric must strictly exceed its limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    pub wind_speed_kph: f64,
    pub wave_height_m: f64,
    /// Clear a fired flag once its metric drops back to or below the limit.
    pub rearm_on_recovery: bool,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            wind_speed_kph: 20.0,
            wave_height_m: 2.0,
            rearm_on_recovery: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    HighWind,
    HighWave,
}

/// A threshold crossing to be presented by the caller (toast, banner, log).
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub kind: AlertKind,
    pub location: String,
    pub value: f64,
    pub threshold: f64,
}

impl AlertEvent {
    pub fn title(&self) -> String {
        match self.kind {
            AlertKind::HighWind => format!("High Wind Alert for {}", self.location),
            AlertKind::HighWave => format!("High Wave Alert for {}", self.location),
        }
    }

    pub fn description(&self) -> String {
        match self.kind {
            AlertKind::HighWind => format!(
                "Current wind speed is {} km/h (exceeds {} km/h threshold).",
                self.value, self.threshold
            ),
            AlertKind::HighWave => format!(
                "Current wave height is {}m (exceeds {}m threshold).",
                self.value, self.threshold
            ),
        }
    }
}

impl std::fmt::Display for AlertEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

/// Which alerts have already fired for `location`.
///
/// `location` is `None` until the first evaluation; the first location seen
/// is adopted without clearing the flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertSuppression {
    pub location: Option<String>,
    pub wind_alerted: bool,
    pub wave_alerted: bool,
}

/// Decides which alerts fire for the current metrics and returns the
/// updated suppression state.
///
/// A change of `location_name` clears both flags before evaluation.
pub fn evaluate_alerts(
    location_name: &str,
    wind_speed_kph: f64,
    wave_height_m: f64,
    thresholds: &AlertThresholds,
    state: AlertSuppression,
) -> (Vec<AlertEvent>, AlertSuppression) {
    let mut next = match state.location.as_deref() {
        Some(previous) if previous != location_name => AlertSuppression::default(),
        _ => state,
    };
    next.location = Some(location_name.to_string());

    let mut events = Vec::new();

    if wind_speed_kph > thresholds.wind_speed_kph {
        if !next.wind_alerted {
            events.push(AlertEvent {
                kind: AlertKind::HighWind,
                location: location_name.to_string(),
                value: wind_speed_kph,
                threshold: thresholds.wind_speed_kph,
            });
            next.wind_alerted = true;
        }
    } else if thresholds.rearm_on_recovery {
        next.wind_alerted = false;
    }

    if wave_height_m > thresholds.wave_height_m {
        if !next.wave_alerted {
            events.push(AlertEvent {
                kind: AlertKind::HighWave,
                location: location_name.to_string(),
                value: wave_height_m,
                threshold: thresholds.wave_height_m,
            });
            next.wave_alerted = true;
        }
    } else if thresholds.rearm_on_recovery {
        next.wave_alerted = false;
    }

    (events, next)
}

/// Alert evaluation bound to one view of one location stream.
///
/// Create one monitor per independent view; sharing a monitor between views
/// of different locations would reset its flags on every alternation.
#[derive(Debug, Clone, Default)]
pub struct AlertMonitor {
    thresholds: AlertThresholds,
    state: AlertSuppression,
}

impl AlertMonitor {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self {
            thresholds,
            state: AlertSuppression::default(),
        }
    }

    pub fn observe(&mut self, location_name: &str, wind_speed_kph: f64, wave_height_m: f64) -> Vec<AlertEvent> {
        let state = std::mem::take(&mut self.state);
        let (events, next) = evaluate_alerts(
            location_name,
            wind_speed_kph,
            wave_height_m,
            &self.thresholds,
            state,
        );
        self.state = next;
        events
    }

    pub fn state(&self) -> &AlertSuppression {
        &self.state
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
