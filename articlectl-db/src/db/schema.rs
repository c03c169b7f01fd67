//! Idempotent schema for the author and article tables

use sqlx::{PgConnection, PgPool};
use tracing::{debug, info};

use crate::{Error, Result};

/// Name of the article -> author foreign key, replaced on every run.
pub const FK_ARTICLE_AUTHOR: &str = "fk_article_author";

const CREATE_AUTHOR: &str = r#"
    CREATE TABLE IF NOT EXISTS author (
        id UUID PRIMARY KEY,
        firstname VARCHAR(255) NOT NULL,
        lastname VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
        updated_at TIMESTAMPTZ,
        deleted_at TIMESTAMPTZ
    )
"#;

// clock_timestamp() rather than now(): rows inserted in one transaction
// must still order by insertion.
const CREATE_ARTICLE: &str = r#"
    CREATE TABLE IF NOT EXISTS article (
        id UUID PRIMARY KEY,
        title VARCHAR(255) UNIQUE NOT NULL,
        body TEXT NOT NULL,
        author_id UUID,
        created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
        updated_at TIMESTAMPTZ,
        deleted_at TIMESTAMPTZ
    )
"#;

const DROP_FK: &str = "ALTER TABLE article DROP CONSTRAINT IF EXISTS fk_article_author";

const ADD_FK: &str = "ALTER TABLE article ADD CONSTRAINT fk_article_author \
                      FOREIGN KEY (author_id) REFERENCES author (id)";

/// Column types the row structs decode from.
///
/// `CREATE TABLE IF NOT EXISTS` keeps a table created by an older schema
/// (e.g. `CHAR(36)` ids, `TIMESTAMP` columns), so these are checked.
const EXPECTED_COLUMNS: &[(&str, &str, &str)] = &[
    ("author", "id", "uuid"),
    ("author", "created_at", "timestamp with time zone"),
    ("author", "updated_at", "timestamp with time zone"),
    ("author", "deleted_at", "timestamp with time zone"),
    ("article", "id", "uuid"),
    ("article", "author_id", "uuid"),
    ("article", "created_at", "timestamp with time zone"),
    ("article", "updated_at", "timestamp with time zone"),
    ("article", "deleted_at", "timestamp with time zone"),
];

const COLUMN_TYPES: &str = r#"
    SELECT table_name::text, column_name::text, data_type::text
    FROM information_schema.columns
    WHERE table_schema = current_schema()
      AND table_name IN ('author', 'article')
"#;

/// Ensure both tables exist and re-create the foreign key.
///
/// Safe to run repeatedly. Everything happens in one transaction, so a
/// concurrent reader never sees the table without its constraint.
///
/// Existing tables with incompatible column types are a config error;
/// `reset` followed by `apply` recreates them.
pub async fn apply(pool: &PgPool) -> Result<()> {
    info!("Applying schema...");
    let mut tx = pool.begin().await?;

    for (name, statement) in [
        ("create author", CREATE_AUTHOR),
        ("create article", CREATE_ARTICLE),
    ] {
        debug!(step = name, "schema statement");
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    check_column_types(&mut tx).await?;

    for (name, statement) in [("drop fk", DROP_FK), ("add fk", ADD_FK)] {
        debug!(step = name, "schema statement");
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("Schema ready");
    Ok(())
}

async fn check_column_types(conn: &mut PgConnection) -> Result<()> {
    let actual: Vec<(String, String, String)> =
        sqlx::query_as(COLUMN_TYPES).fetch_all(&mut *conn).await?;

    match incompatible_column(&actual) {
        Some(reason) => Err(Error::config(reason)),
        None => Ok(()),
    }
}

/// First expected column that is missing or has another type, as a message.
fn incompatible_column(actual: &[(String, String, String)]) -> Option<String> {
    EXPECTED_COLUMNS.iter().find_map(|&(table, column, expected)| {
        let found = actual
            .iter()
            .find(|(t, c, _)| t == table && c == column)
            .map(|(_, _, data_type)| data_type.as_str());

        (found != Some(expected)).then(|| {
            format!(
                "table {table} has an incompatible schema: column {column} is {} (expected {expected}); \
                 run `articlectl schema --reset` to recreate it",
                found.unwrap_or("missing")
            )
        })
    })
}

/// Drop both tables. Used by `schema --reset` and the integration tests.
pub async fn reset(pool: &PgPool) -> Result<()> {
    info!("Dropping article and author tables");
    sqlx::query("DROP TABLE IF EXISTS article, author CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fk_statements_name_the_constraint() {
        assert!(DROP_FK.contains(FK_ARTICLE_AUTHOR));
        assert!(ADD_FK.contains(FK_ARTICLE_AUTHOR));
        assert!(DROP_FK.contains("IF EXISTS"));
    }

    fn current_columns() -> Vec<(String, String, String)> {
        EXPECTED_COLUMNS
            .iter()
            .map(|&(t, c, d)| (t.to_string(), c.to_string(), d.to_string()))
            .collect()
    }

    #[test]
    fn current_schema_is_compatible() {
        assert_eq!(incompatible_column(&current_columns()), None);
    }

    #[test]
    fn char_ids_are_incompatible() {
        let mut columns = current_columns();
        columns[0].2 = "character".to_string();

        let reason = incompatible_column(&columns).unwrap();
        assert!(reason.contains("table author"));
        assert!(reason.contains("column id is character (expected uuid)"));
    }

    #[test]
    fn missing_column_is_incompatible() {
        let columns: Vec<_> = current_columns()
            .into_iter()
            .filter(|(t, c, _)| !(t == "article" && c == "deleted_at"))
            .collect();

        let reason = incompatible_column(&columns).unwrap();
        assert!(reason.contains("column deleted_at is missing"));
    }

    #[test]
    fn create_statements_are_idempotent() {
        for statement in [CREATE_AUTHOR, CREATE_ARTICLE] {
            assert!(statement.contains("CREATE TABLE IF NOT EXISTS"));
        }
    }
}
