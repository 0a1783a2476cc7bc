//! `seasafe`: marine conditions, alerts, and SOS from the command line.
//!
//! # Flow
//! 1. Parse CLI arguments.
//! 2. Load config (`seasafe.toml`, `.env`, environment).
//! 3. Initialize logging.
//! 4. Pick the data source: remote dashboard if `api_url` is set, otherwise
//!    the built-in station registry (live-enriched with a WeatherAPI key).
//! 5. Run the subcommand.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use seasafe_service::alert::{classify_with, AlertMonitor};
use seasafe_service::config::{load_config, Config};
use seasafe_service::i18n::Language;
use seasafe_service::ingest::dashboard::DashboardClient;
use seasafe_service::logging::{self, Component};
use seasafe_service::model::{Coordinates, LocationReading};
use seasafe_service::session::{self, FileStore};
use seasafe_service::sos::{self, FixedPosition, GeolocationProvider, NoGeolocation, SosOutcome};
use seasafe_service::source::{MarineDataSource, RegistrySource};
use seasafe_service::stations::STATION_REGISTRY;

#[derive(Parser, Debug)]
#[command(name = "seasafe", version, about = "Marine safety conditions for coastal fishing stations")]
struct Cli {
    /// Path to a TOML config file (defaults to ./seasafe.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List monitored stations
    Stations,
    /// Show current conditions and safety status
    Status {
        /// Station id; all stations when omitted
        #[arg(long)]
        location: Option<String>,
    },
    /// Poll stations and raise wind / wave alerts
    Watch {
        /// Station ids to watch, each in its own view
        #[arg(long = "location", required = true)]
        locations: Vec<String>,
        /// Seconds between refreshes (config default when omitted)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many refreshes
        #[arg(long)]
        iterations: Option<u32>,
    },
    /// Show the conditions history log
    History,
    /// Broadcast an emergency SOS
    Sos {
        #[arg(long)]
        message: Option<String>,
        #[arg(long, requires = "lng")]
        lat: Option<f64>,
        #[arg(long, requires = "lat")]
        lng: Option<f64>,
    },
    /// Log in on this device
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        location: Option<String>,
    },
    /// Log out on this device
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Toggle a station as favorite
    Favorite { id: String },
    /// List favorite stations
    Favorites,
    /// Show or set the preferred language
    Language { code: Option<String> },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli.config.as_deref())?;
    logging::init_logger(
        config.logging.min_level()?,
        config.logging.file.as_deref(),
        config.logging.timestamps,
    );

    match cli.command {
        Command::Stations => {
            for station in STATION_REGISTRY {
                println!(
                    "{:<20} {:<26} {:<18} {:>8.4}, {:>8.4}",
                    station.id, station.name, station.region, station.latitude, station.longitude
                );
            }
        }
        Command::Status { location } => {
            let source = build_source(&config)?;
            let readings = match location {
                Some(id) => vec![source.location(&id)?],
                None => source.locations()?,
            };
            let (total, mut failed) = (readings.len(), 0);
            for reading in &readings {
                if print_status(&config, reading).is_err() {
                    failed += 1;
                }
            }
            logging::log_refresh_summary(Component::System, total, total - failed, failed);
        }
        Command::Watch { locations, interval, iterations } => {
            let source = build_source(&config)?;
            let interval = Duration::from_secs(interval.unwrap_or(config.data_source.refresh_interval_secs));
            watch(source.as_ref(), &config, &locations, interval, iterations);
        }
        Command::History => {
            let source = build_source(&config)?;
            for entry in source.history()? {
                println!(
                    "{:<10} {:<26} wave {:>4.1} m  wind {:>5.1} km/h  sea {:>4.1} °C  {}",
                    entry.date.get(..10).unwrap_or(entry.date.as_str()),
                    entry.location,
                    entry.wave_height,
                    entry.wind_speed,
                    entry.sea_temperature,
                    entry.status
                );
            }
        }
        Command::Sos { message, lat, lng } => {
            let source = build_source(&config)?;
            let geolocation: Box<dyn GeolocationProvider> = match (lat, lng) {
                (Some(lat), Some(lng)) => Box::new(FixedPosition(Coordinates { lat, lng })),
                _ => Box::new(NoGeolocation),
            };
            match sos::send_sos(source.as_ref(), geolocation.as_ref(), &config.sos, message.as_deref()) {
                SosOutcome::Sent { alert_id, position } => println!(
                    "Alert sent successfully! Help is on the way. (id {}, position {}, {})",
                    alert_id, position.lat, position.lng
                ),
                SosOutcome::Failed { reason, fallback_instruction } => {
                    eprintln!("{}", fallback_instruction);
                    return Err(reason.into());
                }
            }
        }
        Command::Login { name, phone, location } => {
            let mut store = FileStore::open(&config.store.path)?;
            let user = session::login(&mut store, &name, &phone, location.as_deref(), &config.session.admins)?;
            println!("Logged in as {} ({:?}), home {}", user.name, user.role, user.location.unwrap_or_default());
        }
        Command::Logout => {
            let mut store = FileStore::open(&config.store.path)?;
            session::logout(&mut store)?;
            println!("Logged out");
        }
        Command::Whoami => {
            let store = FileStore::open(&config.store.path)?;
            match session::current_user(&store) {
                Some(user) => println!("{} <{}> {:?}", user.name, user.phone, user.role),
                None => println!("Not logged in"),
            }
        }
        Command::Favorite { id } => {
            let mut store = FileStore::open(&config.store.path)?;
            if session::toggle_favorite(&mut store, &id)? {
                println!("Added {} to favorites", id);
            } else {
                println!("Removed {} from favorites", id);
            }
        }
        Command::Favorites => {
            let store = FileStore::open(&config.store.path)?;
            for id in session::favorites(&store) {
                println!("{}", id);
            }
        }
        Command::Language { code } => {
            let mut store = FileStore::open(&config.store.path)?;
            if let Some(code) = code {
                let language: Language = code.parse()?;
                session::set_preferred_language(&mut store, language)?;
            }
            println!("{}", session::preferred_language(&store));
        }
    }

    Ok(())
}

fn build_source(config: &Config) -> Result<Box<dyn MarineDataSource>, Box<dyn Error>> {
    let timeout = Duration::from_secs(config.data_source.timeout_secs);
    match &config.data_source.api_url {
        Some(url) => {
            logging::debug(Component::Dashboard, None, &format!("Using dashboard API at {}", url));
            Ok(Box::new(DashboardClient::new(url, timeout, config.data_source.retry.clone())?))
        }
        None => Ok(Box::new(RegistrySource::new(
            config.data_source.weather_api_key.clone(),
            timeout,
            config.classification.clone(),
        )?)),
    }
}

fn print_status(config: &Config, reading: &LocationReading) -> Result<(), ()> {
    if let Err(e) = reading.validate() {
        logging::warn(Component::System, Some(&reading.id), &e.to_string());
        return Err(());
    }
    let assessment = classify_with(reading, &config.classification);
    println!(
        "{:<26} {:<11} wave {:>4.1} m  wind {:>5.1} km/h  vis {:>4.1} nm  {}",
        reading.name,
        assessment.status.to_string(),
        reading.wave_height,
        reading.wind_speed,
        reading.visibility,
        assessment.advisory
    );
    Ok(())
}

/// Refresh loop. Each location is its own view with its own alert monitor.
fn watch(
    source: &dyn MarineDataSource,
    config: &Config,
    location_ids: &[String],
    interval: Duration,
    iterations: Option<u32>,
) {
    let mut views: Vec<(String, AlertMonitor)> = location_ids
        .iter()
        .map(|id| (id.clone(), AlertMonitor::new(config.alerts.clone())))
        .collect();

    let mut pass = 0u32;
    loop {
        pass = pass.saturating_add(1);
        let mut failed = 0;

        for (id, monitor) in views.iter_mut() {
            let reading = match source.location(id) {
                Ok(reading) => reading,
                Err(e) => {
                    logging::error(Component::System, Some(id.as_str()), &format!("Refresh failed: {}", e));
                    failed += 1;
                    continue;
                }
            };
            if print_status(config, &reading).is_err() {
                failed += 1;
                continue;
            }
            for event in monitor.observe(&reading.name, reading.wind_speed, reading.wave_height) {
                logging::warn(Component::Alert, Some(id.as_str()), &event.to_string());
            }
        }

        logging::log_refresh_summary(Component::System, views.len(), views.len() - failed, failed);

        if watch_finished(pass, iterations) {
            break;
        }
        std::thread::sleep(interval);
    }
}

/// Unbounded watches never finish, however many passes they run.
fn watch_finished(pass: u32, iterations: Option<u32>) -> bool {
    iterations.is_some_and(|max| pass >= max)
}
