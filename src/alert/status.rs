//! Go / no-go safety classification.
//!
//! The status of a station is a pure function of its wave height and wind
//! speed (plus visibility, when a minimum is configured). Nothing here
//! performs I/O or keeps state; callers validate readings first with
//! `LocationReading::validate`.

use serde::{Deserialize, Serialize};

use crate::model::{LocationReading, SafetyStatus};

/// Translation key for the generic safe-tier advisory.
pub const SAFE_ADVISORY_KEY: &str = "advisory.safe";

/// English text for `SAFE_ADVISORY_KEY`.
pub const SAFE_ADVISORY_TEXT: &str =
    "Sea conditions are safe for fishing. Stay alert and follow standard safety protocols.";

const CAUTION_ADVISORY_TEXT: &str =
    "Moderate waves and gusts. Exercise caution during operations.";
const DANGER_ADVISORY_TEXT: &str =
    "High winds and large waves. It is not safe to navigate!";

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Limits for each status tier. A metric must strictly exceed a limit to
/// trigger that tier.
///
/// Limits in ascending order:
///   caution < danger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    pub caution_wave_m: f64,
    pub caution_wind_kph: f64,
    pub danger_wave_m: f64,
    pub danger_wind_kph: f64,
    /// Below this visibility (nm) a station is at least CAUTION. Off when `None`.
    pub min_visibility_nm: Option<f64>,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            caution_wave_m: 1.2,
            caution_wind_kph: 20.0,
            danger_wave_m: 2.0,
            danger_wind_kph: 35.0,
            min_visibility_nm: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Advisory text attached to a classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The generic safe-tier message, to be localized by the caller.
    Generic { key: &'static str },
    /// Location-specific text supplied by the data source.
    Upstream(String),
    /// Canned tier text used when the data source supplied none.
    Canned(&'static str),
}

impl Advisory {
    /// English rendering of the advisory.
    pub fn text(&self) -> &str {
        match self {
            Advisory::Generic { .. } => SAFE_ADVISORY_TEXT,
            Advisory::Upstream(text) => text,
            Advisory::Canned(text) => text,
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// The derived status of a reading and the advisory to show with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub status: SafetyStatus,
    pub advisory: Advisory,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies raw metrics. First matching tier wins:
///
/// 1. wave > danger_wave OR wind > danger_wind  → DO_NOT_GO
/// 2. wave > caution_wave OR wind > caution_wind → CAUTION
/// 3. otherwise                                  → SAFE_TO_GO
///
/// A configured visibility minimum can only raise the result to CAUTION.
pub fn classify_metrics(
    wave_height_m: f64,
    wind_speed_kph: f64,
    visibility_nm: f64,
    thresholds: &ClassificationThresholds,
) -> SafetyStatus {
    let by_sea_state = if wave_height_m > thresholds.danger_wave_m
        || wind_speed_kph > thresholds.danger_wind_kph
    {
        SafetyStatus::DoNotGo
    } else if wave_height_m > thresholds.caution_wave_m
        || wind_speed_kph > thresholds.caution_wind_kph
    {
        SafetyStatus::Caution
    } else {
        SafetyStatus::SafeToGo
    };

    match thresholds.min_visibility_nm {
        Some(min) if visibility_nm < min => by_sea_state.max(SafetyStatus::Caution),
        _ => by_sea_state,
    }
}

/// Classifies a reading with the default thresholds.
pub fn classify(reading: &LocationReading) -> Assessment {
    classify_with(reading, &ClassificationThresholds::default())
}

/// Classifies a reading and picks the advisory for its tier.
pub fn classify_with(reading: &LocationReading, thresholds: &ClassificationThresholds) -> Assessment {
    let status = classify_metrics(
        reading.wave_height,
        reading.wind_speed,
        reading.visibility,
        thresholds,
    );

    let upstream = reading.advisory.trim();
    let advisory = match status {
        SafetyStatus::SafeToGo => Advisory::Generic { key: SAFE_ADVISORY_KEY },
        _ if !upstream.is_empty() => Advisory::Upstream(upstream.to_string()),
        SafetyStatus::Caution => Advisory::Canned(CAUTION_ADVISORY_TEXT),
        SafetyStatus::DoNotGo => Advisory::Canned(DANGER_ADVISORY_TEXT),
    };

    Assessment { status, advisory }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::baseline_reading;

    fn status(wave: f64, wind: f64) -> SafetyStatus {
        classify_metrics(wave, wind, 10.0, &ClassificationThresholds::default())
    }

    fn reading(wave: f64, wind: f64, advisory: &str) -> LocationReading {
        let mut r = baseline_reading("kochi").expect("Kochi is in the registry");
        r.wave_height = wave;
        r.wind_speed = wind;
        r.advisory = advisory.to_string();
        r
    }

    // --- Safe ---------------------------------------------------------------

    #[test]
    fn test_calm_sea_grid_is_safe() {
        let mut wave = 0.0;
        while wave <= 1.2 {
            let mut wind = 0.0;
            while wind <= 20.0 {
                assert_eq!(
                    status(wave, wind),
                    SafetyStatus::SafeToGo,
                    "wave {} m / wind {} km/h should be safe",
                    wave,
                    wind
                );
                wind += 2.5;
            }
            wave += 0.2;
        }
        assert_eq!(status(1.2, 20.0), SafetyStatus::SafeToGo);
    }

    // --- Caution ------------------------------------------------------------

    #[test]
    fn test_moderate_wave_alone_is_caution() {
        assert_eq!(status(1.5, 5.0), SafetyStatus::Caution);
    }

    #[test]
    fn test_moderate_wind_alone_is_caution() {
        assert_eq!(status(0.3, 28.0), SafetyStatus::Caution);
    }

    #[test]
    fn test_wave_exactly_at_danger_limit_is_not_danger() {
        // Strictly greater than: 2.0 m is caution, not danger.
        assert_eq!(status(2.0, 0.0), SafetyStatus::Caution);
    }

    #[test]
    fn test_wind_exactly_at_danger_limit_is_not_danger() {
        assert_eq!(status(0.0, 35.0), SafetyStatus::Caution);
    }

    // --- Danger -------------------------------------------------------------

    #[test]
    fn test_high_wave_with_safe_wind_is_danger() {
        assert_eq!(status(2.5, 10.0), SafetyStatus::DoNotGo);
    }

    #[test]
    fn test_danger_wins_regardless_of_other_metric() {
        for wind in [0.0, 10.0, 20.0, 35.0, 80.0] {
            assert_eq!(status(2.01, wind), SafetyStatus::DoNotGo, "wind {}", wind);
        }
        for wave in [0.0, 1.0, 2.0, 5.0] {
            assert_eq!(status(wave, 35.5), SafetyStatus::DoNotGo, "wave {}", wave);
        }
    }

    // --- Visibility ---------------------------------------------------------

    #[test]
    fn test_visibility_ignored_by_default() {
        assert_eq!(
            classify_metrics(0.5, 5.0, 0.2, &ClassificationThresholds::default()),
            SafetyStatus::SafeToGo
        );
    }

    #[test]
    fn test_low_visibility_raises_safe_to_caution_when_configured() {
        let thresholds = ClassificationThresholds {
            min_visibility_nm: Some(3.0),
            ..ClassificationThresholds::default()
        };
        assert_eq!(classify_metrics(0.5, 5.0, 2.0, &thresholds), SafetyStatus::Caution);
        assert_eq!(classify_metrics(0.5, 5.0, 3.0, &thresholds), SafetyStatus::SafeToGo);
    }

    #[test]
    fn test_low_visibility_never_lowers_danger() {
        let thresholds = ClassificationThresholds {
            min_visibility_nm: Some(3.0),
            ..ClassificationThresholds::default()
        };
        assert_eq!(classify_metrics(3.5, 45.0, 1.0, &thresholds), SafetyStatus::DoNotGo);
    }

    // --- Advisory -----------------------------------------------------------

    #[test]
    fn test_safe_tier_uses_generic_advisory_even_with_upstream_text() {
        let assessment = classify(&reading(0.8, 10.0, "Fog near the harbor mouth."));
        assert_eq!(assessment.status, SafetyStatus::SafeToGo);
        assert_eq!(assessment.advisory, Advisory::Generic { key: SAFE_ADVISORY_KEY });
        assert_eq!(assessment.advisory.text(), SAFE_ADVISORY_TEXT);
    }

    #[test]
    fn test_caution_tier_surfaces_upstream_advisory() {
        let assessment = classify(&reading(1.6, 10.0, "  Swell building from the southwest. "));
        assert_eq!(assessment.status, SafetyStatus::Caution);
        assert_eq!(
            assessment.advisory,
            Advisory::Upstream("Swell building from the southwest.".to_string())
        );
    }

    #[test]
    fn test_blank_upstream_advisory_falls_back_to_canned_text() {
        let caution = classify(&reading(1.6, 10.0, ""));
        let danger = classify(&reading(3.0, 10.0, "   "));
        assert_eq!(caution.advisory, Advisory::Canned(CAUTION_ADVISORY_TEXT));
        assert_eq!(danger.advisory, Advisory::Canned(DANGER_ADVISORY_TEXT));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let r = reading(2.1, 25.5, "");
        assert_eq!(classify(&r), classify(&r));
    }
}
