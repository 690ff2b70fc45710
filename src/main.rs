mod feed;
mod geometry;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::web::Config;

#[derive(Parser)]
#[command(name = "iss-o-mat")]
#[command(about = "ISS position and speed API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Optional YAML config file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Validate a config file and print the effective settings
    Validate { config: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config.as_deref()).await,
        Commands::Validate { config } => validate(&config),
    }
}

async fn serve(path: Option<&str>) -> ExitCode {
    let config = match Config::load(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn validate(path: &str) -> ExitCode {
    match Config::from_file(path) {
        Ok(config) => {
            println!("Config is valid");
            println!("  bind:         {}", config.web.bind);
            println!("  feed:         {}", config.feed.url);
            println!(
                "  timeout:      {}",
                humantime::format_duration(config.feed.timeout)
            );
            println!("  orbit radius: {} km", config.model.orbit_radius_km);
            println!("  earth radius: {} km", config.model.earth_radius_km);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {}", e);
            ExitCode::FAILURE
        }
    }
}
