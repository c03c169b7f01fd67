//! Repository implementations for database access
//!
//! Each repository borrows the pool; inserts also accept any executor so
//! they can join a caller's transaction.

pub mod articles;
pub mod authors;

pub use articles::ArticleRepo;
pub use authors::AuthorRepo;

use sqlx::PgPool;
use uuid::Uuid;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SoftDelete {
    Mark,
    Restore,
}

impl SoftDelete {
    fn statement(self, table: &str) -> String {
        match self {
            Self::Mark => format!(
                "UPDATE {table} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL"
            ),
            Self::Restore => format!(
                "UPDATE {table} SET deleted_at = NULL WHERE id = $1 AND deleted_at IS NOT NULL"
            ),
        }
    }
}

/// Set or clear `deleted_at`. Rows already in the target state are not counted.
pub(crate) async fn set_deleted(
    pool: &PgPool,
    table: &'static str,
    id: Uuid,
    action: SoftDelete,
) -> Result<u64> {
    let result = sqlx::query(&action.statement(table))
        .bind(id)
        .execute(pool)
        .await?;
    tracing::debug!(table, %id, ?action, rows = result.rows_affected(), "soft delete");
    Ok(result.rows_affected())
}
