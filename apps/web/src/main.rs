use goals_web::{api::web_router, build_state, config::Config, init_tracing, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let state = build_state(&config)?;
    let router = web_router(state, &config);
    tracing::info!(
        "Listening on {} (backend {})",
        config.listen_addr,
        config.backend_url
    );
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
