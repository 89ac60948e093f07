use anyhow::Context;

use saberwing_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    saberwing_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    if config.estimator_seed.is_some() {
        tracing::info!("estimator seed configured; analysis results are reproducible");
    }

    let app = saberwing_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
