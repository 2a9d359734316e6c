use credit_decision::config::AppConfig;
use credit_decision::http::routes::router;
use credit_decision::service::decision_service::DecisionService;
use credit_decision::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    // a failed load keeps the server up so /predict can answer with a clear error
    let decision_service = DecisionService::start(&cfg);
    let state = AppState { decision_service };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
