/// Safety classification and threshold alerting.
///
/// Submodules:
/// - `status`:     go / no-go classification and advisory selection.
/// - `thresholds`: one-shot wind and wave alerts with per-location suppression.

pub mod status;
pub mod thresholds;

pub use status::{classify, classify_with, Advisory, Assessment, ClassificationThresholds};
pub use thresholds::{evaluate_alerts, AlertEvent, AlertKind, AlertMonitor, AlertSuppression, AlertThresholds};
