/// End-to-end tests over the offline station registry
///
/// These tests verify:
/// 1. Every registry reading validates and classifies
/// 2. Wire readings carrying a stale status are classified from metrics
/// 3. Alerts fire once per location view and reset on a location change
/// 4. SOS dispatch through the registry source, with and without a fix
/// 5. The synthesized history log is ordered and consistently classified
///
/// No network access or API key is needed.
///
/// Run with: cargo test --test condition_flow

use seasafe_service::alert::{classify, evaluate_alerts, AlertKind, AlertMonitor, AlertSuppression, AlertThresholds};
use seasafe_service::model::{Coordinates, LocationReading, SafetyStatus};
use seasafe_service::sos::{send_sos, FixedPosition, NoGeolocation, SosOutcome, SosSettings, FALLBACK_COORDINATES};
use seasafe_service::source::{MarineDataSource, RegistrySource, HISTORY_LENGTH};
use seasafe_service::stations::STATION_REGISTRY;

use chrono::{TimeZone, Utc};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn test_every_registry_reading_validates_and_classifies() {
    let source = RegistrySource::offline();
    let readings = source.locations().expect("offline source never fails");
    assert_eq!(readings.len(), STATION_REGISTRY.len());

    for reading in &readings {
        reading
            .validate()
            .unwrap_or_else(|e| panic!("{} failed validation: {}", reading.id, e));

        let status = classify(reading).status;
        let expected = if reading.wave_height > 2.0 || reading.wind_speed > 35.0 {
            SafetyStatus::DoNotGo
        } else if reading.wave_height > 1.2 || reading.wind_speed > 20.0 {
            SafetyStatus::Caution
        } else {
            SafetyStatus::SafeToGo
        };
        assert_eq!(status, expected, "{}", reading.id);
    }
}

#[test]
fn test_known_stations_land_in_expected_tiers() {
    let source = RegistrySource::offline();
    assert_eq!(classify(&source.location("puri").unwrap()).status, SafetyStatus::DoNotGo);
    assert_eq!(classify(&source.location("kochi").unwrap()).status, SafetyStatus::Caution);
}

#[test]
fn test_wire_status_is_ignored() {
    let json = r#"{
        "id": "puri",
        "name": "Puri Beach",
        "lat": 19.7983,
        "lng": 85.8245,
        "waveHeight": 2.5,
        "windSpeed": 10,
        "seaTemperature": 28.4,
        "visibility": 8,
        "pressure": 1008,
        "humidity": 80,
        "tide": 1.2,
        "windDirection": 200,
        "waveDirection": 190,
        "status": "SAFE TO GO",
        "advisory": ""
    }"#;
    let reading: LocationReading = serde_json::from_str(json).expect("wire reading parses");
    assert_eq!(classify(&reading).status, SafetyStatus::DoNotGo);
}

#[test]
fn test_unknown_location_is_an_error() {
    let source = RegistrySource::offline();
    assert!(source.location("lemuria").is_err());
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[test]
fn test_monitor_fires_once_per_view() {
    let source = RegistrySource::offline();
    let puri = source.location("puri").unwrap();
    let mut monitor = AlertMonitor::new(AlertThresholds::default());

    let first = monitor.observe(&puri.name, puri.wind_speed, puri.wave_height);
    let kinds: Vec<_> = first.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![AlertKind::HighWind, AlertKind::HighWave]);
    assert_eq!(first[0].title(), "High Wind Alert for Puri Beach");

    for _ in 0..5 {
        assert!(monitor.observe(&puri.name, puri.wind_speed, puri.wave_height).is_empty());
    }
}

#[test]
fn test_switching_location_rearms_alerts() {
    let thresholds = AlertThresholds::default();
    let (events, state) = evaluate_alerts("Puri Beach", 32.0, 2.8, &thresholds, AlertSuppression::default());
    assert_eq!(events.len(), 2);

    let (events, state) = evaluate_alerts("Paradip Port", 32.0, 2.8, &thresholds, state);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].location, "Paradip Port");

    let (events, _) = evaluate_alerts("Paradip Port", 40.0, 3.5, &thresholds, state);
    assert!(events.is_empty());
}

#[test]
fn test_independent_views_do_not_share_suppression() {
    let thresholds = AlertThresholds::default();
    let mut left = AlertMonitor::new(thresholds.clone());
    let mut right = AlertMonitor::new(thresholds);

    assert_eq!(left.observe("Chennai Marina", 25.0, 1.0).len(), 1);
    assert_eq!(right.observe("Chennai Marina", 25.0, 1.0).len(), 1);
}

// ---------------------------------------------------------------------------
// SOS
// ---------------------------------------------------------------------------

#[test]
fn test_sos_with_position_fix() {
    let source = RegistrySource::offline();
    let here = Coordinates { lat: 9.95, lng: 76.25 };
    let outcome = send_sos(&source, &FixedPosition(here), &SosSettings::default(), Some("Engine failure"));

    match outcome {
        SosOutcome::Sent { alert_id, position } => {
            assert!(alert_id.starts_with("sos_"));
            assert_eq!(position, here);
        }
        other => panic!("expected Sent, got {:?}", other),
    }

    let records = source.dispatched();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].request.message, "Engine failure");
    assert_eq!(records[0].request.lat, 9.95);
}

#[test]
fn test_sos_without_fix_uses_fallback_coordinates() {
    let source = RegistrySource::offline();
    let outcome = send_sos(&source, &NoGeolocation, &SosSettings::default(), None);
    assert!(outcome.is_sent());

    let records = source.dispatched();
    assert_eq!(records[0].request.lat, FALLBACK_COORDINATES.lat);
    assert_eq!(records[0].request.lng, FALLBACK_COORDINATES.lng);
}

#[test]
fn test_sos_ids_are_unique() {
    let source = RegistrySource::offline();
    let settings = SosSettings::default();
    send_sos(&source, &NoGeolocation, &settings, None);
    send_sos(&source, &NoGeolocation, &settings, None);

    let records = source.dispatched();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].alert_id, records[1].alert_id);
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

#[test]
fn test_history_is_newest_first_and_classified_from_metrics() {
    let source = RegistrySource::offline();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 6, 0, 0).unwrap();
    let history = source.history_at(now);
    assert_eq!(history.len(), HISTORY_LENGTH);

    let stamps: Vec<_> = history.iter().map(|h| h.timestamp().unwrap()).collect();
    assert_eq!(stamps[0], now);
    assert!(stamps.windows(2).all(|w| w[0] > w[1]));

    for entry in &history {
        let reading = LocationReading {
            wave_height: entry.wave_height,
            wind_speed: entry.wind_speed,
            ..STATION_REGISTRY[0].baseline_reading()
        };
        assert_eq!(classify(&reading).status, entry.status, "{}", entry.id);
    }
}
