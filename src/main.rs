use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookdesk::config::AppConfig;
use bookdesk::handlers;
use bookdesk::state::AppState;
use bookdesk::store::MemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let state = Arc::new(AppState {
        store: Box::new(MemStore::new()),
        config: config.clone(),
    });

    let app = Router::new()
        .route("/", get(handlers::pages::index_page))
        .route("/health", get(handlers::health::health))
        .route(
            "/api/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route(
            "/api/bookings/date/:date",
            get(handlers::bookings::list_bookings_by_date),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = bind_with_fallback(&config.host, config.port).await?;
    tracing::info!("serving on port {}", listener.local_addr()?.port());

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind the configured port, stepping to the next one when it is already
/// taken (up to 10 attempts).
async fn bind_with_fallback(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    const MAX_ATTEMPTS: u16 = 10;

    for attempt in 0..MAX_ATTEMPTS {
        let candidate = port.saturating_add(attempt);
        match TcpListener::bind(format!("{host}:{candidate}")).await {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                tracing::warn!("port {candidate} is in use, trying the next one");
            }
            Err(e) => return Err(e.into()),
        }
    }

    anyhow::bail!("no available port after {MAX_ATTEMPTS} attempts starting at {port}")
}
