mod library;
mod routes;
mod state;

use std::path::Path;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");
    let content_dir = std::env::var("CONTENT_DIR").unwrap_or_else(|_| "content".into());

    let library = library::Library::scan(Path::new(&content_dir)).expect("content scan failed");
    tracing::info!(articles = library.len(), dir = %content_dir, "article library loaded");

    let state = state::AppState::new(library);

    // Background rescan keeps the library in sync with the content dir.
    let _refresh = library::spawn_refresh_task(state.clone());

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "lantern listening");
    axum::serve(listener, app).await.expect("server failed");
}
