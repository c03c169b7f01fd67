//! Fixed seed batch: two authors and three articles, inserted in one transaction.

use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::{uuid, Uuid};

use crate::db::{ArticleRepo, AuthorRepo};
use crate::models::{NewArticle, NewAuthor, OnConflict};
use crate::Result;

pub const JOHN_ID: Uuid = uuid!("3e1dfc06-dcf6-41fc-b3cc-7c0563fdfab3");
pub const SAIDAMIR_ID: Uuid = uuid!("24000e82-9c48-4297-a442-ecd1ad55791e");

pub const ARTICLE_1_ID: Uuid = uuid!("26e2aebc-9771-45ba-8577-ef1a2e7b4170");
pub const ARTICLE_2_ID: Uuid = uuid!("9900756f-e3ed-4dd7-a3a8-4e3cef248ccc");
pub const ARTICLE_3_ID: Uuid = uuid!("3e451dc4-42e8-4dbc-a70b-edee8f6452ba");

/// Authors in insertion order
pub fn authors() -> Vec<NewAuthor> {
    vec![
        NewAuthor::new(JOHN_ID, "John", "Doe"),
        NewAuthor::new(SAIDAMIR_ID, "Saidamir", "Botirov"),
    ]
}

/// Articles in insertion order
pub fn articles() -> Vec<NewArticle> {
    vec![
        NewArticle::new(ARTICLE_1_ID, "Lorem 1", "Body 1", Some(JOHN_ID)),
        NewArticle::new(ARTICLE_2_ID, "Lorem 2", "Body 2", Some(SAIDAMIR_ID)),
        NewArticle::new(ARTICLE_3_ID, "Lorem 3", "Body 3", Some(JOHN_ID)),
    ]
}

/// Per-entity outcome of a seed batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedCounts {
    /// Rows written (inserted or replaced)
    pub written: u64,
    /// Rows left untouched because they already existed
    pub skipped: u64,
}

impl SeedCounts {
    fn record(&mut self, rows: u64) {
        if rows == 0 {
            self.skipped += 1;
        } else {
            self.written += rows;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub authors: SeedCounts,
    pub articles: SeedCounts,
}

/// Insert the fixed batch.
pub async fn run(pool: &PgPool, policy: OnConflict) -> Result<SeedReport> {
    insert_batch(pool, &authors(), &articles(), policy).await
}

/// Insert authors then articles inside a single transaction.
///
/// Any failure returns early; the transaction is dropped and rolled back,
/// so nothing from the batch is persisted.
pub async fn insert_batch(
    pool: &PgPool,
    authors: &[NewAuthor],
    articles: &[NewArticle],
    policy: OnConflict,
) -> Result<SeedReport> {
    info!(
        authors = authors.len(),
        articles = articles.len(),
        %policy,
        "Seeding batch"
    );
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    for author in authors {
        let rows = AuthorRepo::insert_with(&mut *tx, author, policy).await?;
        report.authors.record(rows);
    }

    for article in articles {
        let rows = ArticleRepo::insert_with(&mut *tx, article, policy).await?;
        report.articles.record(rows);
    }

    tx.commit().await?;
    info!(
        authors_written = report.authors.written,
        authors_skipped = report.authors.skipped,
        articles_written = report.articles.written,
        articles_skipped = report.articles.skipped,
        "Seed committed"
    );
    Ok(report)
}
