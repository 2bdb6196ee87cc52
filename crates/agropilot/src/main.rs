// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agropilot - AI agricultural assistant for soybean farmers.
//!
//! This is the binary entry point for the Agropilot assistant.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod session;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Agropilot - AI agricultural assistant for soybean farmers.
#[derive(Parser, Debug)]
#[command(name = "agropilot", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a single question and print the answer.
    Ask {
        /// The question or message for the assistant.
        message: String,

        /// Path to a leaf image for disease detection.
        #[arg(long)]
        image: Option<PathBuf>,

        /// Latitude for location suitability analysis.
        #[arg(long, default_value_t = 0.0)]
        lat: f64,

        /// Longitude for location suitability analysis.
        #[arg(long, default_value_t = 0.0)]
        lon: f64,
    },
    /// Launch an interactive REPL session.
    Shell,
    /// Print the resolved configuration and any validation warnings.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match agropilot_config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("agropilot: failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    match cli.command {
        Some(Commands::Ask {
            message,
            image,
            lat,
            lon,
        }) => {
            let image_bytes = match image {
                Some(path) => match std::fs::read(&path) {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        eprintln!("agropilot: failed to read image {}: {e}", path.display());
                        std::process::exit(1);
                    }
                },
                None => None,
            };

            let mut orchestrator = session::build_orchestrator(&config);
            let response = orchestrator
                .handle(&message, image_bytes.as_deref(), lat, lon)
                .await;
            println!("{response}");
        }
        Some(Commands::Shell) => {
            if let Err(e) = shell::run_shell(&config).await {
                eprintln!("agropilot: shell error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            print_config(&config);
        }
        None => {
            println!("agropilot: use --help for available commands");
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("agropilot={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

/// Prints the resolved configuration as TOML, followed by validation
/// warnings.
fn print_config(config: &agropilot_config::AgropilotConfig) {
    match toml::to_string_pretty(config) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => eprintln!("agropilot: failed to render configuration: {e}"),
    }

    let warnings = agropilot_config::validate(config);
    if !warnings.is_empty() {
        eprintln!();
        for warning in warnings {
            eprintln!("warning: {warning}");
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Verify jemalloc is the global allocator by advancing the epoch.
        // Only jemalloc supports this -- the system allocator would fail.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Config defaults must be loadable without any file on disk.
        let config = agropilot_config::load_config_from_str("")
            .expect("default config should be valid");
        assert_eq!(config.agent.name, "agropilot");
    }
}
