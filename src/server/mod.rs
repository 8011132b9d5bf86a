use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::IconCatalog;

pub mod routes;

/// Server state
pub struct AppState {
    pub catalog: &'static IconCatalog,
    pub asset_base: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/icons", get(routes::list_icons))
        .route("/icons/count", get(routes::count_icons))
        .route("/icons/{idx}", get(routes::get_icon))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(port: u16, asset_base: Option<String>) -> anyhow::Result<()> {
    let catalog = IconCatalog::checked()?;
    let state = Arc::new(AppState { catalog, asset_base });
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {} ({} icons)", addr, catalog.count());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
