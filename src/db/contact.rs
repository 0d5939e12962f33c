//! Singleton access to the `config` table.
//!
//! The table only ever holds the row with rowid 1; there is no collection API.

use sqlx::sqlite::SqlitePool;

use crate::models::ContactConfig;

const SINGLETON_ROWID: i64 = 1;

pub async fn get(pool: &SqlitePool) -> Result<Option<ContactConfig>, sqlx::Error> {
    sqlx::query_as::<_, ContactConfig>(r#"SELECT whatsapp FROM config WHERE rowid = ?"#)
        .bind(SINGLETON_ROWID)
        .fetch_optional(pool)
        .await
}

/// Replace the contact row, creating it on first write.
pub async fn put(pool: &SqlitePool, whatsapp: Option<&str>) -> Result<(), sqlx::Error> {
    sqlx::query(r#"INSERT OR REPLACE INTO config (rowid, whatsapp) VALUES (?, ?)"#)
        .bind(SINGLETON_ROWID)
        .bind(whatsapp)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn absent_until_first_put() {
        let pool = test_pool().await;

        assert_eq!(get(&pool).await.unwrap(), None);

        put(&pool, Some("+34600000000")).await.unwrap();
        assert_eq!(
            get(&pool).await.unwrap(),
            Some(ContactConfig {
                whatsapp: "+34600000000".to_string()
            })
        );
    }

    #[tokio::test]
    async fn put_replaces_the_single_row() {
        let pool = test_pool().await;

        put(&pool, Some("+1")).await.unwrap();
        put(&pool, Some("+2")).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM config")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(get(&pool).await.unwrap().unwrap().whatsapp, "+2");
    }

    #[tokio::test]
    async fn missing_whatsapp_is_rejected() {
        let pool = test_pool().await;

        assert!(put(&pool, None).await.is_err());
        assert_eq!(get(&pool).await.unwrap(), None);
    }
}
