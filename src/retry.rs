//! Exponential backoff for idempotent upstream fetches.
//!
//! Only reads go through here. SOS dispatch is never retried automatically.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::logging::{self, Component};
use crate::model::MarineError;

/// Distinguishes failures worth another attempt from ones that are not.
#[derive(Debug)]
pub enum RetryError {
    /// Network issues and 5xx responses.
    Retryable(MarineError),
    /// 4xx responses, parse failures, unknown locations.
    NonRetryable(MarineError),
}

impl RetryError {
    /// Sorts a `MarineError` into retryable or not.
    pub fn classify(err: MarineError) -> Self {
        match err {
            MarineError::Transport(_) => RetryError::Retryable(err),
            MarineError::HttpError(code) if code >= 500 || code == 429 => RetryError::Retryable(err),
            other => RetryError::NonRetryable(other),
        }
    }

    pub fn into_inner(self) -> MarineError {
        match self {
            RetryError::Retryable(e) | RetryError::NonRetryable(e) => e,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles on each further attempt.
    pub base_delay_ms: u64,
    /// Upper bound on a single delay, before jitter.
    pub max_delay_ms: u64,
    /// Random spread applied to each delay, as a fraction (0.25 = ±25%).
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: 3,
            base_delay_ms: 500,
            max_delay_ms: 8_000,
            jitter_factor: 0.25,
        }
    }
}

/// Delay to wait after failed attempt number `attempt` (0-based).
pub fn backoff_delay(attempt: u32, config: &RetryConfig) -> Duration {
    let factor = 2u64.saturating_pow(attempt);
    let millis = config.base_delay_ms.saturating_mul(factor).min(config.max_delay_ms);
    Duration::from_millis(millis)
}

/// Spreads `delay` by up to ±`factor` so clients that failed together do
/// not retry together.
pub fn apply_jitter<R: Rng>(delay: Duration, factor: f64, rng: &mut R) -> Duration {
    let spread = (delay.as_millis() as f64 * factor.clamp(0.0, 1.0)) as i64;
    if spread == 0 {
        return delay;
    }
    let offset = rng.random_range(-spread..=spread);
    Duration::from_millis((delay.as_millis() as i64 + offset).max(0) as u64)
}

/// Runs `func` until it succeeds, fails non-retryably, or attempts run out.
pub fn with_retry<T, F>(label: &str, config: &RetryConfig, mut func: F) -> Result<T, MarineError>
where
    F: FnMut() -> Result<T, RetryError>,
{
    with_retry_sleeping(label, config, &mut func, std::thread::sleep)
}

fn with_retry_sleeping<T, F, S>(
    label: &str,
    config: &RetryConfig,
    func: &mut F,
    mut sleep: S,
) -> Result<T, MarineError>
where
    F: FnMut() -> Result<T, RetryError>,
    S: FnMut(Duration),
{
    let attempts = config.max_attempts.max(1);
    let mut last_error = None;

    for attempt in 0..attempts {
        match func() {
            Ok(result) => return Ok(result),
            Err(RetryError::NonRetryable(err)) => return Err(err),
            Err(RetryError::Retryable(err)) => {
                if attempt + 1 < attempts {
                    let delay = apply_jitter(backoff_delay(attempt, config), config.jitter_factor, &mut rand::rng());
                    logging::warn(
                        Component::Dashboard,
                        None,
                        &format!(
                            "{} failed ({}), retry {}/{} after {:?}",
                            label,
                            err,
                            attempt + 1,
                            attempts - 1,
                            delay
                        ),
                    );
                    sleep(delay);
                }
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| MarineError::Transport(format!("{}: no attempts made", label))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryConfig::default();
        assert_eq!(backoff_delay(0, &config), Duration::from_millis(500));
        assert_eq!(backoff_delay(1, &config), Duration::from_millis(1_000));
        assert_eq!(backoff_delay(2, &config), Duration::from_millis(2_000));
        assert_eq!(backoff_delay(10, &config), Duration::from_millis(8_000));
        assert_eq!(backoff_delay(70, &config), Duration::from_millis(8_000));
    }

    #[test]
    fn test_jitter_stays_within_factor() {
        let mut rng = rand::rng();
        let base = Duration::from_millis(1_000);
        for _ in 0..200 {
            let d = apply_jitter(base, 0.25, &mut rng);
            assert!(
                d >= Duration::from_millis(750) && d <= Duration::from_millis(1_250),
                "{:?} outside ±25%",
                d
            );
        }
        assert_eq!(apply_jitter(base, 0.0, &mut rng), base);
    }

    #[test]
    fn test_classify_sorts_errors() {
        assert!(matches!(
            RetryError::classify(MarineError::HttpError(503)),
            RetryError::Retryable(_)
        ));
        assert!(matches!(
            RetryError::classify(MarineError::Transport("timeout".into())),
            RetryError::Retryable(_)
        ));
        assert!(matches!(
            RetryError::classify(MarineError::HttpError(404)),
            RetryError::NonRetryable(_)
        ));
        assert!(matches!(
            RetryError::classify(MarineError::ParseError("bad".into())),
            RetryError::NonRetryable(_)
        ));
    }

    #[test]
    fn test_retries_until_success() {
        let mut calls = 0;
        let mut slept = Vec::new();
        let result = with_retry_sleeping(
            "locations",
            &RetryConfig { jitter_factor: 0.0, ..RetryConfig::default() },
            &mut || {
                calls += 1;
                if calls < 3 {
                    Err(RetryError::Retryable(MarineError::HttpError(502)))
                } else {
                    Ok(calls)
                }
            },
            |d| slept.push(d),
        );
        assert_eq!(result, Ok(3));
        assert_eq!(slept, vec![Duration::from_millis(500), Duration::from_millis(1_000)]);
    }

    #[test]
    fn test_non_retryable_stops_immediately() {
        let mut calls = 0;
        let result: Result<(), _> = with_retry_sleeping(
            "location",
            &RetryConfig::default(),
            &mut || {
                calls += 1;
                Err(RetryError::NonRetryable(MarineError::HttpError(404)))
            },
            |_| panic!("must not sleep"),
        );
        assert_eq!(result, Err(MarineError::HttpError(404)));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_gives_up_after_max_attempts_with_last_error() {
        let mut calls = 0;
        let result: Result<(), _> = with_retry_sleeping(
            "history",
            &RetryConfig { max_attempts: 2, ..RetryConfig::default() },
            &mut || {
                calls += 1;
                Err(RetryError::Retryable(MarineError::HttpError(500 + calls)))
            },
            |_| {},
        );
        assert_eq!(result, Err(MarineError::HttpError(502)));
        assert_eq!(calls, 2);
    }
}
