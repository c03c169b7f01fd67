//! End-to-end routine: schema, seed, reads, one update, one delete.

use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::db::{schema, ArticleRepo, AuthorRepo};
use crate::models::{Article, Author, OnConflict};
use crate::seed::{self, SeedReport, ARTICLE_1_ID, ARTICLE_2_ID, ARTICLE_3_ID};
use crate::Result;

pub const UPDATED_TITLE: &str = "Lorem updated";
pub const UPDATED_BODY: &str = "Body updated";

/// Everything the routine observed, in order.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub seed: SeedReport,
    pub authors: Vec<Author>,
    pub fetched: Article,
    pub iterated: Vec<Article>,
    pub updated_rows: u64,
    pub updated: Article,
    pub deleted_rows: u64,
}

/// Run the full sequence. Every step is awaited before the next one starts;
/// the first failure ends the run.
pub async fn run(pool: &PgPool, policy: OnConflict) -> Result<DemoReport> {
    schema::apply(pool).await?;
    let seed = seed::run(pool, policy).await?;

    let authors = AuthorRepo::new(pool);
    let articles = ArticleRepo::new(pool);

    let author_list = authors.list().await?;
    info!(count = author_list.len(), "Listed authors");

    let fetched = articles.get(ARTICLE_1_ID).await?;
    info!(id = %fetched.id, title = %fetched.title, "Fetched article");

    let iterated = articles.iterate().await?;
    info!(count = iterated.len(), "Iterated articles");

    let updated_rows = articles
        .update(ARTICLE_3_ID, UPDATED_TITLE, UPDATED_BODY)
        .await?;
    info!(rows = updated_rows, "Updated article");
    let updated = articles.get(ARTICLE_3_ID).await?;

    let deleted_rows = articles.delete(ARTICLE_2_ID).await?;
    info!(rows = deleted_rows, "Deleted article");

    Ok(DemoReport {
        seed,
        authors: author_list,
        fetched,
        iterated,
        updated_rows,
        updated,
        deleted_rows,
    })
}
