use std::env;

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use snipvault_server::router;
use snipvault_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bind = env::var("SNIPVAULT_BIND").unwrap_or_else(|_| "127.0.0.1:8787".to_string());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(AppState::new()).layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "snipvault server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
