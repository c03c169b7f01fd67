//! Author repository
//!
//! - insert: caller-supplied id, explicit conflict policy
//! - list: ordered by creation time
//! - no hard delete; soft delete via `deleted_at`

use sqlx::{PgExecutor, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::{set_deleted, SoftDelete};
use crate::models::{Author, NewAuthor, OnConflict};
use crate::{Error, Result};

const COLUMNS: &str = "id, firstname, lastname, created_at, updated_at, deleted_at";

/// Author repository
pub struct AuthorRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AuthorRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an author on the pool. Returns rows affected (0 when skipped).
    pub async fn insert(&self, author: &NewAuthor, policy: OnConflict) -> Result<u64> {
        Self::insert_with(self.pool, author, policy).await
    }

    /// Insert on any executor, typically `&mut *tx` inside a batch.
    pub async fn insert_with<'e, E>(
        executor: E,
        author: &NewAuthor,
        policy: OnConflict,
    ) -> Result<u64>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO author (id, firstname, lastname) VALUES ($1, $2, $3){}",
            policy.clause("firstname = EXCLUDED.firstname, lastname = EXCLUDED.lastname")
        );

        let result = sqlx::query(&sql)
            .bind(author.id)
            .bind(&author.firstname)
            .bind(&author.lastname)
            .execute(executor)
            .await
            .map_err(|e| Error::from_write("author", e))?;

        debug!(id = %author.id, %policy, rows = result.rows_affected(), "insert author");
        Ok(result.rows_affected())
    }

    /// All authors, oldest first. Soft-deleted rows are included.
    pub async fn list(&self) -> Result<Vec<Author>> {
        let authors: Vec<Author> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM author ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(authors)
    }

    /// Authors that are not soft-deleted, oldest first.
    pub async fn list_active(&self) -> Result<Vec<Author>> {
        let authors: Vec<Author> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM author WHERE deleted_at IS NULL ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(authors)
    }

    pub async fn get(&self, id: Uuid) -> Result<Author> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM author WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| Error::not_found("author", id))
    }

    /// Rename an author, stamping `updated_at`. Unknown ids affect 0 rows.
    pub async fn update_name(&self, id: Uuid, firstname: &str, lastname: &str) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE author SET firstname = $2, lastname = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(firstname)
        .bind(lastname)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<u64> {
        set_deleted(self.pool, "author", id, SoftDelete::Mark).await
    }

    pub async fn restore(&self, id: Uuid) -> Result<u64> {
        set_deleted(self.pool, "author", id, SoftDelete::Restore).await
    }
}
