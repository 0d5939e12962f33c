use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub mod contact;
pub mod plays;
pub mod torneos;

const CREATE_PLAYS: &str = r#"
    CREATE TABLE IF NOT EXISTS plays (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        tipo TEXT NOT NULL,
        precio_hora REAL NOT NULL,
        mandos_base INTEGER DEFAULT 2,
        estado TEXT CHECK(estado IN ('disponible', 'ocupado')) DEFAULT 'disponible',
        alquilado_hasta DATETIME,
        descripcion TEXT
    )"#;

const CREATE_TORNEOS: &str = r#"
    CREATE TABLE IF NOT EXISTS torneos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        juego TEXT NOT NULL,
        fecha DATETIME NOT NULL,
        premio TEXT NOT NULL,
        precio_inscripcion REAL NOT NULL,
        participantes INTEGER DEFAULT 0,
        inscritos INTEGER DEFAULT 0,
        descripcion TEXT
    )"#;

const CREATE_CONFIG: &str = r#"
    CREATE TABLE IF NOT EXISTS config (
        whatsapp TEXT NOT NULL
    )"#;

/// Open the database file behind `url`, creating it if it does not exist yet.
///
/// The pool holds a single connection for the lifetime of the process, so
/// SQLite executes one statement at a time.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Open a private in-memory database.
///
/// An in-memory database lives only as long as its connection, so the single
/// connection is never reaped or recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Create the `plays`, `torneos` and `config` tables when absent.
///
/// Existing tables are left untouched, whatever their shape.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_PLAYS, CREATE_TORNEOS, CREATE_CONFIG] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!("Schema ready");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect_in_memory().await.unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
