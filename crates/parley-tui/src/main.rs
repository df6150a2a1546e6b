//! parley terminal client entry point.

use std::{io, path::PathBuf, sync::Mutex};

use clap::Parser;
use parley_tui::Runtime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal client for the parley backend
#[derive(Parser, Debug)]
#[command(name = "parley-tui")]
#[command(about = "Terminal client for the parley chat backend")]
#[command(version)]
struct Args {
    /// Base URL of the backend API
    #[arg(short, long, default_value = "http://localhost:8080")]
    server: String,

    /// Append logs to this file (the TUI owns the terminal, so logs are
    /// discarded unless a file is given)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> io::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;

    let runtime = Runtime::new(args.server)?;
    Ok(runtime.run().await?)
}
