use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::models::{CreatedResponse, Torneo, TorneoInput};
use crate::error::ApiError;
use crate::db;

// GET /api/torneos - List all tournaments
pub async fn list_torneos(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Torneo>>, ApiError> {
    let torneos = db::torneos::list(&pool).await?;

    Ok(Json(torneos))
}

// GET /api/torneos/:id - Get tournament by ID
pub async fn get_torneo(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Torneo>, ApiError> {
    let torneo = db::torneos::get(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(torneo))
}

// POST /api/torneos - Publish a tournament
pub async fn create_torneo(
    State(pool): State<SqlitePool>,
    Json(input): Json<TorneoInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = db::torneos::create(&pool, &input).await?;

    tracing::info!(id, "Torneo created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// PUT /api/torneos/:id - Overwrite a tournament
pub async fn update_torneo(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(input): Json<TorneoInput>,
) -> Result<StatusCode, ApiError> {
    let affected = db::torneos::update(&pool, id, &input).await?;

    if affected == 0 {
        tracing::warn!(id, "Update matched no torneo");
    }

    Ok(StatusCode::OK)
}

// DELETE /api/torneos/:id - Remove a tournament
pub async fn delete_torneo(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let affected = db::torneos::delete(&pool, id).await?;

    if affected == 0 {
        tracing::warn!(id, "Delete matched no torneo");
    }

    Ok(StatusCode::OK)
}
