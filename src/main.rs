use anyhow::Context;
use beerbot::config::ServiceConfig;
use beerbot::service::dispatcher::DecisionService;
use beerbot::strategy::implementations::OrderUpToPolicy;
use beerbot::{logging, transport};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = ServiceConfig::from_env();
    let service = Arc::new(DecisionService::new(
        config.identity(),
        Box::<OrderUpToPolicy>::default(),
    ));
    let app = transport::router(service);

    info!(addr = %config.bind_addr, "starting BeerBot decision service");
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
