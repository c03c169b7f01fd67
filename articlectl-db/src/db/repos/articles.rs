//! Article repository
//!
//! Handles article CRUD:
//! - insert: caller-supplied id, explicit conflict policy (title is unique)
//! - get: single-row fetch, missing id is `NotFound`
//! - iterate: row cursor, decode errors abort immediately
//! - update/delete: report rows affected, unknown ids are not errors

use futures::TryStreamExt;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::{set_deleted, SoftDelete};
use crate::models::{Article, NewArticle, OnConflict};
use crate::{Error, Result};

const COLUMNS: &str = "id, title, body, author_id, created_at, updated_at, deleted_at";

/// Article repository
pub struct ArticleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArticleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an article on the pool. Returns rows affected (0 when skipped).
    pub async fn insert(&self, article: &NewArticle, policy: OnConflict) -> Result<u64> {
        Self::insert_with(self.pool, article, policy).await
    }

    /// Insert on any executor, typically `&mut *tx` inside a batch.
    ///
    /// Under [`OnConflict::Ignore`] a duplicate id or duplicate title is
    /// skipped. Under [`OnConflict::Replace`] only the id is the conflict
    /// target, so a title taken by another row is still a `Conflict`.
    pub async fn insert_with<'e, E>(
        executor: E,
        article: &NewArticle,
        policy: OnConflict,
    ) -> Result<u64>
    where
        E: PgExecutor<'e>,
    {
        let sql = format!(
            "INSERT INTO article (id, title, body, author_id) VALUES ($1, $2, $3, $4){}",
            policy.clause(
                "title = EXCLUDED.title, body = EXCLUDED.body, author_id = EXCLUDED.author_id"
            )
        );

        let result = sqlx::query(&sql)
            .bind(article.id)
            .bind(&article.title)
            .bind(&article.body)
            .bind(article.author_id)
            .execute(executor)
            .await
            .map_err(|e| Error::from_write("article", e))?;

        debug!(id = %article.id, %policy, rows = result.rows_affected(), "insert article");
        Ok(result.rows_affected())
    }

    /// Fetch exactly one article by primary key.
    pub async fn get(&self, id: Uuid) -> Result<Article> {
        sqlx::query_as(&format!("SELECT {COLUMNS} FROM article WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| Error::not_found("article", id))
    }

    /// All articles, oldest first. Soft-deleted rows are included.
    pub async fn list(&self) -> Result<Vec<Article>> {
        let articles: Vec<Article> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM article ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(articles)
    }

    pub async fn list_active(&self) -> Result<Vec<Article>> {
        let articles: Vec<Article> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM article WHERE deleted_at IS NULL ORDER BY created_at ASC"
        ))
        .fetch_all(self.pool)
        .await?;
        Ok(articles)
    }

    pub async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Article>> {
        let articles: Vec<Article> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM article WHERE author_id = $1 ORDER BY created_at ASC"
        ))
        .bind(author_id)
        .fetch_all(self.pool)
        .await?;
        Ok(articles)
    }

    /// Walk every article through a row cursor, decoding one row at a time.
    ///
    /// The first row that fails to decode aborts the walk with its error.
    pub async fn iterate(&self) -> Result<Vec<Article>> {
        let sql = format!("SELECT {COLUMNS} FROM article");
        let mut rows = sqlx::query_as::<_, Article>(&sql).fetch(self.pool);

        let mut articles = Vec::new();
        while let Some(article) = rows.try_next().await? {
            debug!(n = articles.len() + 1, id = %article.id, title = %article.title, "article row");
            articles.push(article);
        }
        Ok(articles)
    }

    /// Replace title and body, stamping `updated_at` with server time.
    pub async fn update(&self, id: Uuid, title: &str, body: &str) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE article SET title = $2, body = $3, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .bind(body)
        .execute(self.pool)
        .await
        .map_err(|e| Error::from_write("article", e))?;
        Ok(result.rows_affected())
    }

    /// Permanently remove an article.
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM article WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<u64> {
        set_deleted(self.pool, "article", id, SoftDelete::Mark).await
    }

    pub async fn restore(&self, id: Uuid) -> Result<u64> {
        set_deleted(self.pool, "article", id, SoftDelete::Restore).await
    }
}
