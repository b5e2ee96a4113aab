use std::sync::Arc;

use clap::Parser;
use menubot_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Arc::new(Args::parse());
    let addr = format!("{}:{}", args.server.host, args.server.port);

    let state = state(args).await?;
    let router = router(state)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
