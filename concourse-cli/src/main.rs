/// Concourse Action SHell (cash)
///
/// Connects to Concourse Server and runs driver commands, either
/// interactively or as a one-shot with --run.

use anyhow::Result;
use clap::Parser;
use concourse_client::{Concourse, ConnectArgs};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod render;
mod shell;

#[derive(Parser, Debug)]
#[command(name = "cash")]
#[command(about = "Concourse Action SHell", long_about = None)]
struct Args {
    /// Server host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Server client port
    #[arg(short, long, default_value = "1717")]
    port: u16,

    /// Username for authentication
    #[arg(short, long, default_value = "admin")]
    username: String,

    /// Password for authentication
    #[arg(long, default_value = "admin")]
    password: String,

    /// Environment to operate on (empty uses the server default)
    #[arg(short, long, default_value = "")]
    environment: String,

    /// Path to a TOML preferences file; values found there win over flags
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Run one command and exit instead of starting the shell
    #[arg(short, long, value_name = "COMMAND")]
    run: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Default to warn so the prompt stays quiet, override with RUST_LOG
    // Example: RUST_LOG=concourse_client=debug cash
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut connect = ConnectArgs::new()
        .host(args.host)
        .port(args.port)
        .username(args.username)
        .password(args.password)
        .environment(args.environment);
    if let Some(prefs) = args.prefs {
        connect = connect.prefs(prefs);
    }

    let db = Concourse::connect(connect).await?;
    tracing::info!("Connected to {}:{}", db.host(), db.port());

    match args.run {
        Some(command) => shell::run_once(db, &command).await,
        None => shell::Shell::new(db)?.run().await,
    }
}
