use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::models::{CreatedResponse, Play, PlayInput};
use crate::error::ApiError;
use crate::db;

// GET /api/plays - List all play stations
pub async fn list_plays(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Play>>, ApiError> {
    let plays = db::plays::list(&pool).await?;

    Ok(Json(plays))
}

// GET /api/plays/:id - Get play station by ID
pub async fn get_play(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Play>, ApiError> {
    let play = db::plays::get(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(play))
}

// POST /api/plays - Register a new play station
pub async fn create_play(
    State(pool): State<SqlitePool>,
    Json(input): Json<PlayInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = db::plays::create(&pool, &input).await?;

    tracing::info!(id, "Play created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// PUT /api/plays/:id - Overwrite a play station
pub async fn update_play(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(input): Json<PlayInput>,
) -> Result<StatusCode, ApiError> {
    let affected = db::plays::update(&pool, id, &input).await?;

    // Absent ids still answer 200, clients rely on it
    if affected == 0 {
        tracing::warn!(id, "Update matched no play");
    }

    Ok(StatusCode::OK)
}

// DELETE /api/plays/:id - Remove a play station
pub async fn delete_play(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let affected = db::plays::delete(&pool, id).await?;

    if affected == 0 {
        tracing::warn!(id, "Delete matched no play");
    }

    Ok(StatusCode::OK)
}
