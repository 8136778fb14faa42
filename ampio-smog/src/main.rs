use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use ampio_smog::AmpioSmog;
use ampio_smog::ampio::AmpioConfig;
use ampio_smog::domain::{StationId, StationSnapshot};

/// Station read when `AMPIO_SENSOR_ID` is not set.
const DEFAULT_SENSOR_ID: &str = "16";

/// Session timeout when `AMPIO_TIMEOUT_SECS` is not set.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sensor_id = std::env::var("AMPIO_SENSOR_ID").unwrap_or_else(|_| DEFAULT_SENSOR_ID.into());
    let sensor_id = match StationId::parse(&sensor_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("AMPIO_SENSOR_ID: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = AmpioConfig::new();
    if let Ok(url) = std::env::var("AMPIO_BASE_URL") {
        config = config.with_base_url(url);
    }
    if let Ok(template) = std::env::var("AMPIO_PATH_TEMPLATE") {
        config = config.with_path_template(template);
    }

    let timeout_secs = match env_secs("AMPIO_TIMEOUT_SECS") {
        Ok(secs) => secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    let poll_secs = match env_secs("AMPIO_POLL_SECS") {
        Ok(secs) => secs,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let session = match reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
    {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut station = match AmpioSmog::with_config(sensor_id, session, config) {
        Ok(station) => station,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(poll_secs) = poll_secs else {
        print_snapshot(station.fetch().await);
        return ExitCode::SUCCESS;
    };

    let mut interval = tokio::time::interval(Duration::from_secs(poll_secs.max(1)));
    loop {
        interval.tick().await;
        print_snapshot(station.fetch().await);
        println!();
    }
}

/// Read an optional whole number of seconds from the environment.
fn env_secs(name: &str) -> Result<Option<u64>, String> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{name}: expected seconds, got {raw:?} ({e})")),
        Err(_) => Ok(None),
    }
}

fn print_snapshot(snapshot: &StationSnapshot) {
    println!("Name: {}", display(&snapshot.name));
    println!("Last Seen: {}", display(&snapshot.last_seen));
    println!("PM 10: {}", display(&snapshot.pm10));
    println!("PM 25: {}", display(&snapshot.pm2_5));
    println!("Humidity: {}", display(&snapshot.humidity));
    println!("Air Pressure: {}", display(&snapshot.pressure));
    println!("Temperature: {}", display(&snapshot.temperature));
    println!("Latitude: {}", display(&snapshot.latitude));
    println!("Longitude: {}", display(&snapshot.longitude));
}

fn display<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "None".to_string(), ToString::to_string)
}
