/// Process-wide logger for the SeaSafe service
///
/// Every line carries a component tag and, where one applies, the station
/// id it concerns. Console output is terse by default; a log file, when
/// configured, always receives fully timestamped lines so `watch` sessions
/// can be reviewed afterwards.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;

use crate::model::MarineError;

// ---------------------------------------------------------------------------
// Levels and components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Subsystem a log line originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    WeatherApi,
    Dashboard,
    Alert,
    Sos,
    Store,
    System,
}

impl Component {
    pub fn tag(self) -> &'static str {
        match self {
            Component::WeatherApi => "WAPI",
            Component::Dashboard => "DASH",
            Component::Alert => "ALERT",
            Component::Sos => "SOS",
            Component::Store => "STORE",
            Component::System => "SYS",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    min_level: LogLevel,
    file: Option<PathBuf>,
    /// Full timestamped lines on the console too, not just in the file.
    timestamps: bool,
}

impl Logger {
    fn stamped_line(level: LogLevel, component: Component, station: Option<&str>, message: &str) -> String {
        format!(
            "{} {} {}{}: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            level,
            component,
            station_suffix(station),
            message
        )
    }

    fn console_line(level: LogLevel, component: Component, station: Option<&str>, message: &str) -> String {
        match level {
            LogLevel::Error => format!("   ✗ {}{}: {}", component, station_suffix(station), message),
            LogLevel::Warn => format!("   ⚠ {}{}: {}", component, station_suffix(station), message),
            LogLevel::Info => format!("   {}", message),
            LogLevel::Debug => format!("   [DEBUG] {}{}: {}", component, station_suffix(station), message),
        }
    }

    fn write(&self, level: LogLevel, component: Component, station: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let stamped = Self::stamped_line(level, component, station, message);
        let console = if self.timestamps {
            stamped.clone()
        } else {
            Self::console_line(level, component, station, message)
        };
        if level >= LogLevel::Warn {
            eprintln!("{}", console);
        } else {
            println!("{}", console);
        }

        if let Some(path) = &self.file {
            let appended = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .and_then(|mut f| writeln!(f, "{}", stamped));
            if let Err(e) = appended {
                eprintln!("Cannot append to log file {}: {}", path.display(), e);
            }
        }
    }
}

fn station_suffix(station: Option<&str>) -> String {
    station.map(|s| format!(" [{}]", s)).unwrap_or_default()
}

/// Installs the process logger. Logging is a no-op until this runs.
pub fn init_logger(min_level: LogLevel, file: Option<&str>, timestamps: bool) {
    if let Ok(mut slot) = LOGGER.lock() {
        *slot = Some(Logger {
            min_level,
            file: file.map(PathBuf::from),
            timestamps,
        });
    }
}

fn emit(level: LogLevel, component: Component, station: Option<&str>, message: &str) {
    if let Ok(slot) = LOGGER.lock() {
        if let Some(logger) = slot.as_ref() {
            logger.write(level, component, station, message);
        }
    }
}

pub fn debug(component: Component, station: Option<&str>, message: &str) {
    emit(LogLevel::Debug, component, station, message);
}

pub fn info(component: Component, station: Option<&str>, message: &str) {
    emit(LogLevel::Info, component, station, message);
}

pub fn warn(component: Component, station: Option<&str>, message: &str) {
    emit(LogLevel::Warn, component, station, message);
}

pub fn error(component: Component, station: Option<&str>, message: &str) {
    emit(LogLevel::Error, component, station, message);
}

// ---------------------------------------------------------------------------
// Upstream failures
// ---------------------------------------------------------------------------

/// How worrying an upstream failure is, which decides its log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Normal for some stations, e.g. a point outside marine coverage.
    Expected,
    /// Bad key, broken upstream, or a changed response format.
    Unexpected,
    Unknown,
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureClass::Expected => "EXPECTED",
            FailureClass::Unexpected => "UNEXPECTED",
            FailureClass::Unknown => "UNKNOWN",
        })
    }
}

pub fn classify_fetch_failure(err: &MarineError) -> FailureClass {
    match err {
        // WeatherAPI answers 400 for points it has no marine data for.
        MarineError::HttpError(400) | MarineError::LocationNotFound(_) => FailureClass::Expected,
        MarineError::HttpError(401 | 403) => FailureClass::Unexpected,
        MarineError::HttpError(code) if *code >= 500 => FailureClass::Unexpected,
        MarineError::ParseError(_) => FailureClass::Unexpected,
        _ => FailureClass::Unknown,
    }
}

/// Logs a failed upstream fetch that was answered from baseline data.
pub fn log_fetch_failure(component: Component, station_id: &str, operation: &str, err: &MarineError) {
    let class = classify_fetch_failure(err);
    let message = format!("{} failed [{}]: {}, using baseline values", operation, class, err);

    match class {
        FailureClass::Expected => debug(component, Some(station_id), &message),
        FailureClass::Unexpected => error(component, Some(station_id), &message),
        FailureClass::Unknown => warn(component, Some(station_id), &message),
    }
}

/// One line per refresh pass: info when clean, error when nothing loaded.
pub fn log_refresh_summary(component: Component, total: usize, successful: usize, failed: usize) {
    let message = format!("Refreshed {}/{} stations ({} failed)", successful, total, failed);
    match (successful, failed) {
        (_, 0) => info(component, None, &message),
        (0, _) => error(component, None, &message),
        _ => warn(component, None, &message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_level_parses_config_spellings() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(" debug ".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_fetch_failures_are_classified_by_variant() {
        assert_eq!(classify_fetch_failure(&MarineError::HttpError(400)), FailureClass::Expected);
        assert_eq!(
            classify_fetch_failure(&MarineError::LocationNotFound("atlantis".into())),
            FailureClass::Expected
        );
        assert_eq!(classify_fetch_failure(&MarineError::HttpError(401)), FailureClass::Unexpected);
        assert_eq!(classify_fetch_failure(&MarineError::HttpError(503)), FailureClass::Unexpected);
        assert_eq!(
            classify_fetch_failure(&MarineError::ParseError("missing field `current`".into())),
            FailureClass::Unexpected
        );
        assert_eq!(classify_fetch_failure(&MarineError::HttpError(429)), FailureClass::Unknown);
        assert_eq!(
            classify_fetch_failure(&MarineError::Transport("timed out".into())),
            FailureClass::Unknown
        );
    }

    #[test]
    fn test_stamped_line_carries_component_and_station() {
        let line = Logger::stamped_line(LogLevel::Warn, Component::Alert, Some("kochi"), "High Wind");
        assert!(line.ends_with("WARN ALERT [kochi]: High Wind"), "got '{}'", line);
    }

    #[test]
    fn test_file_receives_only_enabled_levels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seasafe.log");
        let logger = Logger {
            min_level: LogLevel::Info,
            file: Some(path.clone()),
            timestamps: false,
        };
        logger.write(LogLevel::Debug, Component::System, None, "filtered out");
        logger.write(LogLevel::Info, Component::System, None, "first");
        logger.write(LogLevel::Error, Component::Sos, Some("puri"), "second");

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO SYS: first"));
        assert!(lines[1].ends_with("ERROR SOS [puri]: second"));
    }
}
