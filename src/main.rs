use clap::Parser;

use crate::server::AppState;

mod dao;
mod queries;
mod server;
mod types;

#[derive(Parser, Debug)]
pub struct Args {
    /// Path to the backing JSON document
    #[arg(long, default_value = "movies.json")]
    pub movies_path: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8081)]
    pub port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let state = AppState::load(&args);

    let addr = format!("0.0.0.0:{}", args.port);
    tracing::info!("starting movies-api on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, server::app(state)).await?;

    Ok(())
}
