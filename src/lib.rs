//! SeaSafe marine conditions service.
//!
//! Go / no-go safety classification, one-shot wind and wave alerts, SOS
//! dispatch, and a device-local session for a registry of Indian coastal
//! fishing stations.

pub mod alert;
pub mod config;
pub mod i18n;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod retry;
pub mod session;
pub mod sos;
pub mod source;
pub mod stations;
