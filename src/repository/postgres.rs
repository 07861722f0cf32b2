//! PostgreSQL document store (JSONB rows in the `documents` table)

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::{Document, DocumentStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct PgDocumentStore<T> {
    pool: Pool<Postgres>,
    collection: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> PgDocumentStore<T> {
    pub fn new(pool: Pool<Postgres>, collection: &str) -> Self {
        Self {
            pool,
            collection: collection.to_string(),
            _record: PhantomData,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// Create the `documents` table if needed
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[async_trait]
impl<T: Document> DocumentStore<T> for PgDocumentStore<T> {
    async fn create(&self, id: &str, record: &T) -> StoreResult<()> {
        let body = serde_json::to_value(record)?;
        let result = sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO NOTHING
            "#,
        )
        .bind(&self.collection)
        .bind(id)
        .bind(body)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict(id.to_string()));
        }
        Ok(())
    }

    async fn find(&self, id: &str) -> StoreResult<T> {
        let body: serde_json::Value = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(&self.collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        Ok(serde_json::from_value(body)?)
    }

    async fn find_all(&self) -> StoreResult<Vec<T>> {
        let rows: Vec<serde_json::Value> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 ORDER BY created_at, id",
        )
        .bind(&self.collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|body| serde_json::from_value(body).map_err(StoreError::from))
            .collect()
    }

    async fn update(&self, id: &str, record: &T) -> StoreResult<()> {
        let body = serde_json::to_value(record)?;
        let result = sqlx::query("UPDATE documents SET body = $3 WHERE collection = $1 AND id = $2")
            .bind(&self.collection)
            .bind(id)
            .bind(body)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(&self.collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
