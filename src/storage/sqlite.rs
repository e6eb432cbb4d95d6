use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::{
    error::{AppError, Result},
    storage::BlobStore,
};

pub struct SqliteBlobStore {
    pool: SqlitePool,
}

impl SqliteBlobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT value FROM kv_store WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(row.map(|(value,)| value))
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(())
    }
}
