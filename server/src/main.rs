mod layout;
mod session;
mod store;

use axum::{routing::get, Router};
use pairs::PORT;
use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    sync::Arc,
};
use store::ResultStore;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

const ASSETS_DIR: &str = "assets";

fn router(store: Arc<ResultStore>) -> Router {
    Router::new()
        .route("/ws", get(session::ws_handler))
        .nest_service("/assets", ServeDir::new(ASSETS_DIR))
        .route_service(
            "/favicon",
            ServeFile::new(format!("{}/favicon.ico", ASSETS_DIR)),
        )
        .fallback_service(ServeFile::new(format!("{}/index.html", ASSETS_DIR)))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn init_logging() {
    const LOG_ENV: &str = "RUST_LOG";
    use std::str::FromStr;
    use tracing::Level;
    use tracing_subscriber::EnvFilter;

    let filter = std::env::var(LOG_ENV)
        .map(|env| {
            EnvFilter::from_str(env.to_uppercase().as_str())
                .unwrap_or_else(|err| panic!("invalid `{}` environment variable {}", LOG_ENV, err))
        })
        .unwrap_or(EnvFilter::default().add_directive(Level::INFO.into()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let store = Arc::new(ResultStore::default());
    let address = SocketAddr::from(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, PORT));
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("Starting server on {}", address);
    axum::serve(listener, router(store)).await?;
    Ok(())
}
