// These Clippy lints are disabled because this is a server binary, not a library:
// - print_stderr: startup failures go to stderr for the operator.
// - exit: Calling `std::process::exit()` is standard for signalling failure to the shell.
#![allow(clippy::print_stderr, clippy::exit)]

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use notes_api::{AppState, build_router};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "notes-api", version, about = "In-memory notes CRUD service")]
struct Args {
    /// Listen address.
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: SocketAddr,

    /// Disable the `user`-cookie auth guard.
    #[arg(long)]
    no_auth: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env).init();

    let args = Args::parse();
    let state = Arc::new(AppState::new(!args.no_auth));
    let router = build_router(state);

    let listener = TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("binding {}", args.addr))?;
    info!(addr = %args.addr, auth = !args.no_auth, "notes-api listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
