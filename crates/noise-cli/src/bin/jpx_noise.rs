use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jpx_noise_cli::input::{category_hint, load_observers, load_track};
use jpx_noise_cli::{init_tracing, Config};
use jpx_noise_core::{
    calculate_flight_noise_impact, classify_aircraft, default_observers, simple_noise_estimate,
    Direction, ProfileResolver,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ground noise estimates for KJPX traffic", long_about = None)]
struct Args {
    /// Certified profile JSON (icaoToEasaMap format); overrides JPX_PROFILE_PATH
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved noise profile for a type designator
    Profile {
        type_code: String,
        /// Category hint (helicopter, jet, fixed_wing, unknown)
        #[arg(long)]
        category: Option<String>,
    },
    /// Classify a type designator
    Classify { type_code: String },
    /// Overhead-only estimate when no track is available
    Estimate {
        type_code: String,
        #[arg(long)]
        altitude: f64,
        #[arg(long, default_value = "arrival")]
        direction: Direction,
        #[arg(long)]
        category: Option<String>,
    },
    /// Noise impact of a whole track across observer sites
    Impact {
        /// Track JSON: array of positions or a FlightAware track response
        #[arg(long)]
        track: PathBuf,
        #[arg(long = "type")]
        type_code: String,
        #[arg(long, default_value = "unknown-flight")]
        flight_id: String,
        #[arg(long, default_value = "arrival")]
        direction: Direction,
        #[arg(long)]
        category: Option<String>,
        /// Observer JSON array; defaults to the KJPX sites
        #[arg(long)]
        observers: Option<PathBuf>,
        /// Seconds between track samples
        #[arg(long)]
        interval: Option<f64>,
    },
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();
    let mut config = Config::from_env();
    if args.profiles.is_some() {
        config.profile_path = args.profiles.clone();
    }

    let resolver = match &config.profile_path {
        Some(path) => ProfileResolver::from_path(path)
            .with_context(|| format!("failed to load noise profiles from {}", path.display()))?,
        None => ProfileResolver::builtin().context("bundled noise profiles are invalid")?,
    };
    tracing::debug!(certified = resolver.len(), "profile resolver ready");

    match args.command {
        Command::Profile {
            type_code,
            category,
        } => {
            let hint = category_hint(category.as_deref(), &type_code);
            print_json(&resolver.resolve_profile(&type_code, hint))
        }
        Command::Classify { type_code } => {
            println!("{}", classify_aircraft(&type_code));
            Ok(())
        }
        Command::Estimate {
            type_code,
            altitude,
            direction,
            category,
        } => {
            let hint = category_hint(category.as_deref(), &type_code);
            print_json(&simple_noise_estimate(
                &resolver, &type_code, altitude, direction, hint,
            ))
        }
        Command::Impact {
            track,
            type_code,
            flight_id,
            direction,
            category,
            observers,
            interval,
        } => {
            if let Some(secs) = interval {
                anyhow::ensure!(secs.is_finite() && secs > 0.0, "--interval must be positive");
                config.impact.position_interval_secs = secs;
            }
            let positions = load_track(&track)?;
            let observers = match observers {
                Some(path) => load_observers(&path)?,
                None => default_observers(),
            };
            let hint = category_hint(category.as_deref(), &type_code);

            tracing::info!(
                %flight_id,
                %type_code,
                %direction,
                samples = positions.len(),
                observers = observers.len(),
                "calculating flight noise impact"
            );
            let impact = calculate_flight_noise_impact(
                &resolver,
                &config.impact,
                &flight_id,
                &type_code,
                &positions,
                direction,
                hint,
                &observers,
            );
            print_json(&impact)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
