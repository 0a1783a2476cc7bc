/// Live tests against WeatherAPI.com
///
/// These tests verify that forecast and marine responses for a real
/// station parse and merge into a valid reading.
///
/// Prerequisites:
/// - WEATHER_API_KEY set in the environment or in .env
/// - Internet connectivity
///
/// Run with: cargo test --test weatherapi_integration -- --ignored
///
/// Note: These tests make real API calls and count against the key's quota.

use std::time::Duration;

use seasafe_service::alert::classify;
use seasafe_service::ingest::weatherapi;
use seasafe_service::stations::baseline_reading;

fn api_key() -> String {
    dotenv::dotenv().ok();
    std::env::var("WEATHER_API_KEY").expect("WEATHER_API_KEY must be set for live tests")
}

fn client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .expect("client builds")
}

#[test]
#[ignore]
fn test_live_fetch_produces_valid_reading() {
    let baseline = baseline_reading("visakhapatnam").expect("station in registry");
    let reading = weatherapi::fetch_live(&client(), &api_key(), &baseline).expect("live fetch succeeds");

    reading.validate().expect("live reading validates");
    assert_eq!(reading.id, baseline.id);
    assert!(!reading.forecast.is_empty(), "forecast days present");
    println!("{}: {} ({} km/h, {} m)", reading.name, classify(&reading).status, reading.wind_speed, reading.wave_height);
}

#[test]
#[ignore]
fn test_bad_key_falls_back_to_baseline() {
    let baseline = baseline_reading("kochi").expect("station in registry");
    let reading = weatherapi::live_or_baseline(&client(), Some("not-a-real-key"), &baseline);
    assert_eq!(reading, baseline);
}
