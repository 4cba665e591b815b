use anyhow::Result;
use clap::Parser;
use lazylinear::{config, tui};
use std::fs::OpenOptions;
use std::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "lazylinear")]
#[command(about = "Terminal dashboard for browsing and filtering Linear issues")]
#[command(version)]
struct Args {
    /// Initialize configuration
    #[arg(long)]
    init: bool,

    /// Path to config file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,
}

/// Send logs to `~/.lazylinear/lazylinear.log`; the terminal belongs to the TUI.
fn init_logging() -> Result<()> {
    let dir = config::config_dir()?;
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("lazylinear.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lazylinear=info".parse()?),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is optional: without a writable log file the dashboard still runs
    let _ = init_logging();

    if args.init {
        config::init_wizard(args.config.as_deref())?;
        return Ok(());
    }

    let config = config::load(args.config.as_deref())?;
    if !config.has_api_key() {
        tracing::warn!("No Linear API key configured; requests will be unauthenticated");
    }

    tracing::info!("Starting lazylinear");
    tui::run(config).await
}
