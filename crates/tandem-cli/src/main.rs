use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::TandemConfig;
use tandem_core::{AnthropicBackend, CompletionRouter, GroqBackend};
use tandem_gateway::GatewayServer;

#[derive(Parser)]
#[command(name = "tandem")]
#[command(version)]
#[command(about = "Tandem — a chat completion gateway with dual-provider failover")]
struct Cli {
    /// Address to bind (overrides TANDEM_BIND)
    #[arg(short, long)]
    bind: Option<String>,

    /// Port to listen on (overrides TANDEM_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut cfg = TandemConfig::from_env().context("Failed to load configuration")?;
    if let Some(bind) = cli.bind {
        cfg.server.bind = bind;
    }
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }

    let primary = AnthropicBackend::new(
        cfg.anthropic.api_key.clone(),
        cfg.anthropic.model.clone(),
        cfg.anthropic.base_url.clone(),
        cfg.anthropic.max_tokens,
    );
    let fallback = GroqBackend::new(
        cfg.groq.api_key.clone(),
        cfg.groq.model.clone(),
        cfg.groq.base_url.clone(),
    );
    info!("Primary provider: anthropic ({})", cfg.anthropic.model);
    info!("Fallback provider: groq ({})", cfg.groq.model);

    let router = Arc::new(CompletionRouter::new(Box::new(primary), Box::new(fallback)));

    let addr: SocketAddr = format!("{}:{}", cfg.server.bind, cfg.server.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", cfg.server.bind, cfg.server.port))?;

    GatewayServer::new(addr, router).run().await
}
