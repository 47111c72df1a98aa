use std::sync::Arc;

use anyhow::Context;

use spacex_dash::config::DashConfig;
use spacex_dash::data::loader::load_file;
use spacex_dash::server::{ServerState, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashConfig::default();

    // The table is the whole application; refuse to start without it.
    let table = Arc::new(load_file(&config.data_path)?);

    let router = build_router(ServerState::new(table, config.slider));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    log::info!("Dashboard listening on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to listen for Ctrl-C: {e}");
            }
            log::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
