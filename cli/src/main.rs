//! Palm Aire booking service: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/palmaire-booking/config.toml)
//! palmaire-booking
//!
//! # Custom config path
//! palmaire-booking --config /etc/palmaire-booking/config.toml
//!
//! # Override the API port
//! palmaire-booking --api-port 8080
//!
//! # Validate config without starting
//! palmaire-booking --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use palmaire_booking::config::AppConfig;
use palmaire_booking::server::{init_tracing, ServerHandle, ServerOptions};

/// Palm Aire booking service: pricing, availability, holds and bookings.
#[derive(Parser, Debug)]
#[command(
    name = "palmaire-booking",
    version,
    about = "Booking backend for the Palm Aire vacation rentals",
    long_about = "REST API server for unit catalog, pricing, availability, \
                  holds and bookings.\n\n\
                  Default config: ~/.config/palmaire-booking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PALMAIRE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip seeding the unit catalog into an empty database.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(palmaire_booking::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // Init tracing first so subsequent logs are formatted properly
    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            if cli.check {
                return Err(e.into());
            }
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}:{}", config.server.api_host, config.server.api_port);
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!(
            "   Holds       : {} min (allowed {}-{})",
            config.booking.default_hold_minutes,
            config.booking.min_hold_minutes,
            config.booking.max_hold_minutes
        );
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        seed: !cli.no_seed,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    // Wait for shutdown signal, then clean up
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
