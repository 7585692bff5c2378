//! seat-desk - operator front end for the seating engine
//!
//! Reads the venue layout and a check-in snapshot, plans every show and
//! prints the ranked strategies as an `ApiResponse` JSON envelope on stdout.

mod config;
mod desk;
mod logger;
mod snapshot;

use config::Config;
use serde::Serialize;
use shared::error::ApiResponse;

/// Load `.env`, read configuration and install logging
fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

fn print_response<T: Serialize>(response: &ApiResponse<T>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = setup_environment()?;
    tracing::info!(
        layout = ?config.venue_layout,
        snapshot = ?config.guest_snapshot,
        show = ?config.show_time,
        "seat-desk starting"
    );

    match desk::run(&config) {
        Ok(report) => {
            let message = format!("{} show(s) planned", report.shows.len());
            print_response(&ApiResponse::success_with_message(message, report))
        }
        Err(err) => {
            tracing::error!(
                code = %err.code,
                category = err.code.category().name(),
                "{}",
                err.message
            );
            print_response(&ApiResponse::<()>::from(err))?;
            std::process::exit(1);
        }
    }
}
