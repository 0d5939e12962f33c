use sqlx::sqlite::SqlitePool;

use crate::models::{Torneo, TorneoInput};

pub async fn list(pool: &SqlitePool) -> Result<Vec<Torneo>, sqlx::Error> {
    // fecha is DATETIME, so a date like "20261114" is stored as an INTEGER
    sqlx::query_as::<_, Torneo>(
        r#"SELECT
               id,
               juego,
               CAST(fecha AS TEXT) AS fecha,
               premio,
               precio_inscripcion,
               participantes,
               inscritos,
               descripcion
           FROM torneos"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Torneo>, sqlx::Error> {
    sqlx::query_as::<_, Torneo>(
        r#"SELECT
               id,
               juego,
               CAST(fecha AS TEXT) AS fecha,
               premio,
               precio_inscripcion,
               participantes,
               inscritos,
               descripcion
           FROM torneos
           WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

// participantes and inscritos default to 0 on insert and overwrite alike
pub async fn create(pool: &SqlitePool, torneo: &TorneoInput) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO torneos (juego, fecha, premio, precio_inscripcion, participantes, inscritos, descripcion)
           VALUES (?, ?, ?, ?, COALESCE(?, 0), COALESCE(?, 0), ?)"#,
    )
    .bind(&torneo.juego)
    .bind(&torneo.fecha)
    .bind(&torneo.premio)
    .bind(torneo.precio_inscripcion)
    .bind(torneo.participantes)
    .bind(torneo.inscritos)
    .bind(&torneo.descripcion)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn update(pool: &SqlitePool, id: i64, torneo: &TorneoInput) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"UPDATE torneos SET
               juego = ?,
               fecha = ?,
               premio = ?,
               precio_inscripcion = ?,
               participantes = COALESCE(?, 0),
               inscritos = COALESCE(?, 0),
               descripcion = ?
           WHERE id = ?"#,
    )
    .bind(&torneo.juego)
    .bind(&torneo.fecha)
    .bind(&torneo.premio)
    .bind(torneo.precio_inscripcion)
    .bind(torneo.participantes)
    .bind(torneo.inscritos)
    .bind(&torneo.descripcion)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM torneos WHERE id = ?"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
