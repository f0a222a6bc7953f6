//! Enhancer Web - serve the prompt enhancer form

use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enhancer_web::{build_app, AppState};

/// Prompt Enhancer - browser form for turning Role, Context and Task into a better prompt
#[derive(Parser, Debug)]
#[command(name = "enhancer-web")]
#[command(about = "Serve the prompt enhancer form")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: std::net::IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// OpenAI-compatible API base (defaults to the public OpenAI endpoint)
    #[arg(short = 'u', long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let state = AppState::new(args.backend_url.clone())?;
    let app = build_app(state);

    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!("Prompt Enhancer starting on http://{}", addr);
    if let Some(url) = &args.backend_url {
        tracing::info!("Backend URL: {}", url);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
