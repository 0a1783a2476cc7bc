/// Dashboard API client
///
/// Talks to a remote SeaSafe dashboard backend that already aggregates
/// station conditions. Reads are retried with backoff; SOS dispatch is sent
/// exactly once.
///
/// Endpoints:
///   GET  /api/locations
///   GET  /api/locations/{id}
///   GET  /api/history
///   POST /api/sos

use std::time::Duration;

use crate::model::{HistoryEntry, LocationReading, MarineError, SosReceipt, SosRequest};
use crate::retry::{with_retry, RetryConfig, RetryError};
use crate::source::MarineDataSource;

pub struct DashboardClient {
    client: reqwest::blocking::Client,
    base_url: String,
    retry: RetryConfig,
}

impl DashboardClient {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryConfig) -> Result<Self, MarineError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with retry, returning the response body.
    fn get_body(&self, path: &str) -> Result<String, MarineError> {
        let url = self.url(path);
        with_retry(path, &self.retry, || {
            let response = self
                .client
                .get(&url)
                .header("Accept", "application/json")
                .send()
                .map_err(|e| RetryError::classify(e.into()))?;

            if !response.status().is_success() {
                return Err(RetryError::classify(MarineError::HttpError(response.status().as_u16())));
            }

            response.text().map_err(|e| RetryError::classify(e.into()))
        })
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

pub fn parse_locations_body(body: &str) -> Result<Vec<LocationReading>, MarineError> {
    Ok(serde_json::from_str(body)?)
}

/// Parses a single-location body. The backend answers unknown ids with an
/// empty object (or `null`) rather than a 404.
pub fn parse_location_body(id: &str, body: &str) -> Result<LocationReading, MarineError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.as_object().is_none_or(|o| o.is_empty()) {
        return Err(MarineError::LocationNotFound(id.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn parse_history_body(body: &str) -> Result<Vec<HistoryEntry>, MarineError> {
    Ok(serde_json::from_str(body)?)
}

/// A 404 on a location lookup means the id is unknown.
fn not_found_as(id: &str, err: MarineError) -> MarineError {
    match err {
        MarineError::HttpError(404) => MarineError::LocationNotFound(id.to_string()),
        other => other,
    }
}

impl MarineDataSource for DashboardClient {
    fn locations(&self) -> Result<Vec<LocationReading>, MarineError> {
        parse_locations_body(&self.get_body("/api/locations")?)
    }

    fn location(&self, id: &str) -> Result<LocationReading, MarineError> {
        let body = self
            .get_body(&format!("/api/locations/{}", id))
            .map_err(|e| not_found_as(id, e))?;
        parse_location_body(id, &body)
    }

    fn history(&self) -> Result<Vec<HistoryEntry>, MarineError> {
        parse_history_body(&self.get_body("/api/history")?)
    }

    fn dispatch_sos(&self, request: &SosRequest) -> Result<SosReceipt, MarineError> {
        let response = self.client.post(self.url("/api/sos")).json(request).send()?;

        if !response.status().is_success() {
            return Err(MarineError::HttpError(response.status().as_u16()));
        }

        let receipt: SosReceipt = response.json()?;
        if receipt.status != "success" {
            return Err(MarineError::ParseError(format!(
                "SOS endpoint answered status '{}'",
                receipt.status
            )));
        }
        Ok(receipt)
    }
}
