//! FleetDB CLI Client
//!
//! Command-line interface for a running FleetDB server.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use fleetdb::protocol::{UpdateFuelTypeBody, UpdateMaxSpeedBody};
use fleetdb::{FleetError, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, Url};
use serde_json::Value;

/// FleetDB CLI
#[derive(Parser, Debug)]
#[command(name = "fleetdb-cli")]
#[command(about = "CLI for the FleetDB vehicle catalog")]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every vehicle
    List,

    /// Create one vehicle from a JSON object file
    Create { file: PathBuf },

    /// Create vehicles from a JSON array file
    Batch { file: PathBuf },

    /// Vehicles of a color built in a year
    ColorYear { color: String, year: i32 },

    /// Vehicles of a brand built strictly between two years
    BrandYears {
        brand: String,
        start_year: i32,
        end_year: i32,
    },

    /// Average max speed of a brand
    AvgSpeed { brand: String },

    /// Average passenger capacity of a brand
    AvgCapacity { brand: String },

    /// Vehicles with a fuel type
    FuelType { fuel_type: String },

    /// Vehicles with a transmission
    Transmission { transmission: String },

    /// Vehicles strictly inside height and width bounds
    Dimensions {
        min_height: f64,
        max_height: f64,
        min_width: f64,
        max_width: f64,
    },

    /// Vehicles strictly inside weight bounds
    Weight { min: f64, max: f64 },

    /// Set the max speed of a vehicle
    UpdateSpeed { id: u64, max_speed: i32 },

    /// Set the fuel type of a vehicle
    UpdateFuel { id: u64, fuel_type: String },

    /// Delete a vehicle
    Del { id: u64 },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let base = Url::parse(&args.server)
        .map_err(|e| FleetError::Config(format!("invalid server URL {}: {}", args.server, e)))?;
    let client = Client::new();

    let request = match args.command {
        Commands::List => client.get(endpoint(&base, &["vehicles"])?),
        Commands::Create { file } => {
            client.post(endpoint(&base, &["vehicles"])?).json(&read_json(&file)?)
        }
        Commands::Batch { file } => client
            .post(endpoint(&base, &["vehicles", "batch"])?)
            .json(&read_json(&file)?),
        Commands::ColorYear { color, year } => client.get(endpoint(
            &base,
            &["vehicles", "color", &color, "year", &year.to_string()],
        )?),
        Commands::BrandYears {
            brand,
            start_year,
            end_year,
        } => client.get(endpoint(
            &base,
            &[
                "vehicles",
                "brand",
                &brand,
                "between",
                &start_year.to_string(),
                &end_year.to_string(),
            ],
        )?),
        Commands::AvgSpeed { brand } => client.get(endpoint(
            &base,
            &["vehicles", "average_speed", "brand", &brand],
        )?),
        Commands::AvgCapacity { brand } => client.get(endpoint(
            &base,
            &["vehicles", "average_capacity", "brand", &brand],
        )?),
        Commands::FuelType { fuel_type } => {
            client.get(endpoint(&base, &["vehicles", "fuel_type", &fuel_type])?)
        }
        Commands::Transmission { transmission } => client.get(endpoint(
            &base,
            &["vehicles", "transmission", &transmission],
        )?),
        Commands::Dimensions {
            min_height,
            max_height,
            min_width,
            max_width,
        } => client
            .get(endpoint(&base, &["vehicles", "dimensions"])?)
            .query(&[
                ("height", format!("{}-{}", min_height, max_height)),
                ("width", format!("{}-{}", min_width, max_width)),
            ]),
        Commands::Weight { min, max } => client
            .get(endpoint(&base, &["vehicles", "weight"])?)
            .query(&[("min", min), ("max", max)]),
        Commands::UpdateSpeed { id, max_speed } => client
            .request(
                Method::PUT,
                endpoint(&base, &["vehicles", &id.to_string(), "update_speed"])?,
            )
            .json(&UpdateMaxSpeedBody { max_speed }),
        Commands::UpdateFuel { id, fuel_type } => client
            .request(
                Method::PUT,
                endpoint(&base, &["vehicles", &id.to_string(), "update_fuel"])?,
            )
            .json(&UpdateFuelTypeBody { fuel_type }),
        Commands::Del { id } => client.delete(endpoint(&base, &["vehicles", &id.to_string()])?),
    };

    print_response(request)
}

/// Append percent-encoded path segments to the base URL
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FleetError::Config(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn print_response(request: RequestBuilder) -> Result<()> {
    let response = request
        .send()
        .map_err(|e| FleetError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| FleetError::Network(e.to_string()))?;

    println!("{}", status);
    if !body.is_empty() {
        match serde_json::from_str::<Value>(&body) {
            Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
            Err(_) => println!("{}", body),
        }
    }

    if status.is_success() {
        Ok(())
    } else {
        Err(FleetError::Network(format!("server answered {}", status)))
    }
}
