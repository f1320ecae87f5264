use log::{error, info};
use tradedesk_runner::{Bootstrap, RunnerConfig, run_until};

fn print_help() {
    eprintln!(
        r#"Tradedesk - order execution and settlement core

USAGE:
    tradedesk [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    SWEEP_INTERVAL_MS   Milliseconds between sweeps of resting orders (default: 2000)
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Run with the default NSE catalog
    tradedesk

    # Run with config file
    tradedesk --config tradedesk.json

    # Sweep every 500ms
    SWEEP_INTERVAL_MS=500 tradedesk
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = if let Some(path) = config_path {
        info!("Loading configuration from: {}", path);
        RunnerConfig::from_file(&path)?
    } else {
        info!("Using default configuration");
        RunnerConfig::default()
    };

    if let Ok(raw) = std::env::var("SWEEP_INTERVAL_MS") {
        config.override_sweep_interval(&raw)?;
    }

    let bootstrap = match Bootstrap::with_config(config).await {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            error!("Startup failed: {}", e);
            return Err(e.into());
        }
    };

    info!("Venue: {}", bootstrap.config.name);
    for instrument in bootstrap.exchange.desk().instruments() {
        info!(
            "  {} {} {} @ {}",
            instrument.symbol,
            instrument.exchange,
            instrument.instrument_type,
            instrument.reference_price
        );
    }
    info!("Sweep interval: {}ms", bootstrap.config.sweep_interval_ms);

    let summary = run_until(&bootstrap.exchange, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
        }
    })
    .await?;

    info!("Stopped after {} fills", summary.fills_logged);
    Ok(())
}
