use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use travelrank::{
    AppContext, Preferences, RecommendationEngine, TravelRankConfig, TravelRankError, telemetry,
    web,
};

/// Travel destination recommender ranking cities by live weather and traffic
#[derive(Debug, Parser)]
#[command(name = "travelrank", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the web pages and JSON API (default)
    Serve {
        /// Override `server.port`
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Rank the dataset once and print the result as JSON
    Recommend {
        /// Free-form preferences
        #[arg(short, long)]
        preferences: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e
                .downcast_ref::<TravelRankError>()
                .map_or_else(|| format!("{e:#}"), TravelRankError::user_message);
            tracing::error!("{:#}", e);
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = TravelRankConfig::load_from_path(cli.config)?;
    let command = cli.command.unwrap_or(Command::Serve { port: None });
    if let Command::Serve { port: Some(port) } = &command {
        config.server.port = *port;
        config.validate()?;
    }

    // Installed before the runtime exists so the OTLP exporter owns its own thread
    let _telemetry = telemetry::init(&config.logging, cli.verbose)?;
    tracing::debug!("Configuration: {:?}", redacted(&config));

    let context = AppContext::load(config)?;
    let engine = Arc::new(RecommendationEngine::from_context(&context)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async move {
        match command {
            Command::Serve { .. } => web::run(&context.config.server, engine).await,
            Command::Recommend { preferences } => {
                let recommendations = engine.recommend(&Preferences::from(preferences)).await;
                let json = serde_json::to_string_pretty(&recommendations)
                    .context("Failed to serialize recommendations")?;
                println!("{json}");
                Ok(())
            }
        }
    })
}

/// Copy of the config with API keys masked, for logging
fn redacted(config: &TravelRankConfig) -> TravelRankConfig {
    let mut config = config.clone();
    for key in [&mut config.weather.api_key, &mut config.traffic.api_key] {
        if key.is_some() {
            *key = Some("***".to_string());
        }
    }
    config
}
