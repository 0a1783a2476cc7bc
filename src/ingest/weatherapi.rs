/// WeatherAPI.com client
///
/// Retrieves current conditions, marine (wave / sea temperature) data, and the
/// 14-day forecast for a coastal station, and folds them into the station's
/// baseline reading.
///
/// API Documentation: https://www.weatherapi.com/docs/
/// Forecast: https://api.weatherapi.com/v1/forecast.json
/// Marine:   https://api.weatherapi.com/v1/marine.json

use serde::Deserialize;

use crate::logging::{self, Component};
use crate::model::{Coordinates, ForecastDay, LocationReading, MarineError, WeatherAlert};

const WEATHERAPI_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Forecast horizon requested from the forecast endpoint.
pub const FORECAST_DAYS: u8 = 14;

const KM_PER_NAUTICAL_MILE: f64 = 1.852;

// ============================================================================
// WeatherAPI Response Structures
// ============================================================================

/// `forecast.json` response
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentConditions>,
    pub forecast: Option<ForecastBlock>,
    pub alerts: Option<AlertsBlock>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentConditions {
    pub wind_kph: Option<f64>,
    pub wind_degree: Option<f64>,
    pub vis_km: Option<f64>,
    pub pressure_mb: Option<f64>,
    pub humidity: Option<f64>,
    pub air_quality: Option<AirQuality>,
}

#[derive(Debug, Deserialize)]
pub struct AirQuality {
    #[serde(rename = "us-epa-index")]
    pub us_epa_index: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct AlertsBlock {
    #[serde(default)]
    pub alert: Vec<WeatherAlert>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastBlock {
    #[serde(default)]
    pub forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
pub struct ApiForecastDay {
    pub date: String,
    pub day: Option<DaySummary>,
    pub astro: Option<Astro>,
    #[serde(default)]
    pub hour: Vec<MarineHour>,
}

#[derive(Debug, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: Option<f64>,
    pub mintemp_c: Option<f64>,
    pub condition: Option<Condition>,
    pub daily_chance_of_rain: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct Condition {
    pub text: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Astro {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

/// One hourly entry of `marine.json`
#[derive(Debug, Deserialize)]
pub struct MarineHour {
    pub sig_ht_mt: Option<f64>,   // Significant wave height (m)
    pub swell_dir: Option<f64>,   // Swell direction (degrees)
    pub water_temp_c: Option<f64>,
}

/// `marine.json` response; shares the forecast day layout.
#[derive(Debug, Deserialize)]
pub struct MarineResponse {
    pub forecast: Option<ForecastBlock>,
}

// ============================================================================
// URL Construction
// ============================================================================

pub fn build_forecast_url(api_key: &str, at: Coordinates) -> String {
    format!(
        "{}/forecast.json?key={}&q={},{}&days={}&aqi=yes&alerts=yes",
        WEATHERAPI_BASE_URL, api_key, at.lat, at.lng, FORECAST_DAYS
    )
}

pub fn build_marine_url(api_key: &str, at: Coordinates) -> String {
    format!(
        "{}/marine.json?key={}&q={},{}&days=1",
        WEATHERAPI_BASE_URL, api_key, at.lat, at.lng
    )
}

// ============================================================================
// Parsing
// ============================================================================

pub fn parse_forecast_response(body: &str) -> Result<ForecastResponse, MarineError> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_marine_response(body: &str) -> Result<MarineResponse, MarineError> {
    Ok(serde_json::from_str(body)?)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compass bearing rounded to 0.1°, kept within [0, 360).
fn round_bearing(degrees: f64) -> f64 {
    round1(degrees).rem_euclid(360.0)
}

/// Overlays live data onto `baseline`. Any field the provider omits keeps its
/// baseline value.
///
/// Wave height, swell direction, and sea temperature come from the first
/// marine hour; visibility is converted from km to nautical miles.
pub fn apply_live_data(
    baseline: &LocationReading,
    forecast: &ForecastResponse,
    marine: &MarineResponse,
) -> LocationReading {
    let mut reading = baseline.clone();

    let first_hour = marine
        .forecast
        .as_ref()
        .and_then(|f| f.forecastday.first())
        .and_then(|day| day.hour.first());

    if let Some(hour) = first_hour {
        if let Some(wave) = hour.sig_ht_mt {
            reading.wave_height = round1(wave);
        }
        if let Some(dir) = hour.swell_dir {
            reading.wave_direction = round_bearing(dir);
        }
        if let Some(temp) = hour.water_temp_c {
            reading.sea_temperature = round1(temp);
        }
    }

    if let Some(current) = &forecast.current {
        if let Some(wind) = current.wind_kph {
            reading.wind_speed = round1(wind);
        }
        if let Some(deg) = current.wind_degree {
            reading.wind_direction = round_bearing(deg);
        }
        if let Some(vis) = current.vis_km {
            reading.visibility = round1(vis / KM_PER_NAUTICAL_MILE);
        }
        if let Some(pressure) = current.pressure_mb {
            reading.pressure = pressure.round();
        }
        if let Some(humidity) = current.humidity {
            reading.humidity = humidity.round();
        }
        reading.aqi = Some(
            current
                .air_quality
                .as_ref()
                .and_then(|aq| aq.us_epa_index)
                .unwrap_or(1),
        );
    }

    reading.alerts = forecast
        .alerts
        .as_ref()
        .map(|a| a.alert.clone())
        .unwrap_or_default();

    reading.forecast = forecast
        .forecast
        .as_ref()
        .map(|f| f.forecastday.iter().map(to_forecast_day).collect())
        .unwrap_or_default();

    if let Some(today) = reading.forecast.first() {
        if today.sunrise.is_some() {
            reading.sunrise = today.sunrise.clone();
        }
        if today.sunset.is_some() {
            reading.sunset = today.sunset.clone();
        }
    }

    reading
}

fn to_forecast_day(day: &ApiForecastDay) -> ForecastDay {
    let summary = day.day.as_ref();
    let condition = summary.and_then(|d| d.condition.as_ref());
    ForecastDay {
        date: day.date.clone(),
        maxtemp_c: summary.and_then(|d| d.maxtemp_c),
        mintemp_c: summary.and_then(|d| d.mintemp_c),
        condition: condition.and_then(|c| c.text.clone()),
        icon: condition.and_then(|c| c.icon.clone()),
        daily_chance_of_rain: summary.and_then(|d| d.daily_chance_of_rain).unwrap_or(0),
        sunrise: day.astro.as_ref().and_then(|a| a.sunrise.clone()),
        sunset: day.astro.as_ref().and_then(|a| a.sunset.clone()),
    }
}

// ============================================================================
// API Client Functions
// ============================================================================

fn get_body(client: &reqwest::blocking::Client, url: &str) -> Result<String, MarineError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()?;

    if !response.status().is_success() {
        return Err(MarineError::HttpError(response.status().as_u16()));
    }

    Ok(response.text()?)
}

/// Fetch live conditions for a station and merge them into its baseline.
pub fn fetch_live(
    client: &reqwest::blocking::Client,
    api_key: &str,
    baseline: &LocationReading,
) -> Result<LocationReading, MarineError> {
    let at = baseline.coordinates();
    let forecast_body = get_body(client, &build_forecast_url(api_key, at))?;
    let marine_body = get_body(client, &build_marine_url(api_key, at))?;

    let forecast = parse_forecast_response(&forecast_body)?;
    let marine = parse_marine_response(&marine_body)?;

    Ok(apply_live_data(baseline, &forecast, &marine))
}

/// Live reading when possible, otherwise the baseline.
///
/// Without an API key the baseline is returned silently at debug level;
/// fetch failures are logged with classification and also fall back.
pub fn live_or_baseline(
    client: &reqwest::blocking::Client,
    api_key: Option<&str>,
    baseline: &LocationReading,
) -> LocationReading {
    let Some(key) = api_key.filter(|k| !k.trim().is_empty()) else {
        logging::debug(
            Component::WeatherApi,
            Some(&baseline.id),
            "No WEATHER_API_KEY configured, using baseline values",
        );
        return baseline.clone();
    };

    match fetch_live(client, key, baseline) {
        Ok(reading) => reading,
        Err(e) => {
            logging::log_fetch_failure(Component::WeatherApi, &baseline.id, "live fetch", &e);
            baseline.clone()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
