use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use marquee::config::Config;
use marquee::errors::AppError;
use marquee::handlers::{
    handle_home, handle_object_get, handle_object_revoke, handle_object_upload, handle_preview,
    handle_static,
};
use marquee::logger::Logger;
use marquee::services::ObjectStore;
use marquee::types::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::new();
    let addr = config.socket_addr();
    let state = AppState {
        objects: ObjectStore::new(config.max_object_bytes),
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/", get(handle_home))
        .route("/preview", get(handle_preview))
        .route("/objects", post(handle_object_upload))
        .route(
            "/objects/:id",
            get(handle_object_get).delete(handle_object_revoke),
        )
        .route("/static/*path", get(handle_static))
        .with_state(state);

    println!("Marquee listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(AppError::from)
}
