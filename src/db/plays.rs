use sqlx::sqlite::SqlitePool;

use crate::models::{Play, PlayInput};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Play>, sqlx::Error> {
    // DATETIME has numeric affinity: "1760000000" is stored as an INTEGER
    sqlx::query_as::<_, Play>(
        r#"SELECT
               id,
               tipo,
               precio_hora,
               mandos_base,
               estado,
               CAST(alquilado_hasta AS TEXT) AS alquilado_hasta,
               descripcion
           FROM plays"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Play>, sqlx::Error> {
    sqlx::query_as::<_, Play>(
        r#"SELECT
               id,
               tipo,
               precio_hora,
               mandos_base,
               estado,
               CAST(alquilado_hasta AS TEXT) AS alquilado_hasta,
               descripcion
           FROM plays
           WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a play and return its generated id.
///
/// `mandos_base` and `estado` fall back to the column defaults when omitted.
pub async fn create(pool: &SqlitePool, play: &PlayInput) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO plays (tipo, precio_hora, mandos_base, estado, alquilado_hasta, descripcion)
           VALUES (?, ?, COALESCE(?, 2), COALESCE(?, 'disponible'), ?, ?)"#,
    )
    .bind(&play.tipo)
    .bind(play.precio_hora)
    .bind(play.mandos_base)
    .bind(play.estado)
    .bind(&play.alquilado_hasta)
    .bind(&play.descripcion)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every mutable column of play `id`, returning the rows affected.
pub async fn update(pool: &SqlitePool, id: i64, play: &PlayInput) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE plays SET
               tipo = ?,
               precio_hora = ?,
               mandos_base = COALESCE(?, 2),
               estado = COALESCE(?, 'disponible'),
               alquilado_hasta = ?,
               descripcion = ?
           WHERE id = ?"#,
    )
    .bind(&play.tipo)
    .bind(play.precio_hora)
    .bind(play.mandos_base)
    .bind(play.estado)
    .bind(&play.alquilado_hasta)
    .bind(&play.descripcion)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM plays WHERE id = ?"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
