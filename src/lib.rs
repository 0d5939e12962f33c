use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

/// Build the full HTTP router on top of an open, initialised pool.
pub fn app(pool: SqlitePool) -> Router {
    // Any browser client may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Lounge API - v0.1" }))
        .route("/health", get(routes::health::health_check))

        // Contact config
        .route(
            "/api/config",
            get(routes::contact::get_config).put(routes::contact::put_config),
        )

        // Play stations
        .route(
            "/api/plays",
            get(routes::plays::list_plays).post(routes::plays::create_play),
        )
        .route(
            "/api/plays/{id}",
            get(routes::plays::get_play)
                .put(routes::plays::update_play)
                .delete(routes::plays::delete_play),
        )

        // Tournaments
        .route(
            "/api/torneos",
            get(routes::torneos::list_torneos).post(routes::torneos::create_torneo),
        )
        .route(
            "/api/torneos/{id}",
            get(routes::torneos::get_torneo)
                .put(routes::torneos::update_torneo)
                .delete(routes::torneos::delete_torneo),
        )

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(pool)
}
