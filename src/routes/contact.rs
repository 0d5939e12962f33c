use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::models::{ContactConfig, ContactConfigInput};
use crate::error::ApiError;
use crate::db;

// GET /api/config - Get the WhatsApp contact, empty until first set
pub async fn get_config(
    State(pool): State<SqlitePool>,
) -> Result<Json<ContactConfig>, ApiError> {
    let config = db::contact::get(&pool).await?.unwrap_or_default();

    Ok(Json(config))
}

// PUT /api/config - Replace the WhatsApp contact
pub async fn put_config(
    State(pool): State<SqlitePool>,
    Json(input): Json<ContactConfigInput>,
) -> Result<StatusCode, ApiError> {
    db::contact::put(&pool, input.whatsapp.as_deref()).await?;

    Ok(StatusCode::OK)
}
