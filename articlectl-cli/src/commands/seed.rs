use anyhow::{Context, Result};
use articlectl_db::db::schema;
use articlectl_db::{seed, OnConflict};
use clap::Parser;
use sqlx::PgPool;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Conflict policy: ignore (skip existing rows), error, or replace
    #[arg(long, value_name = "POLICY")]
    pub on_conflict: Option<OnConflict>,
}

pub async fn run_seed(pool: &PgPool, policy: OnConflict, out: Output) -> Result<()> {
    schema::apply(pool).await.context("failed to apply schema")?;
    let report = seed::run(pool, policy)
        .await
        .with_context(|| format!("seed batch failed (policy: {policy})"))?;

    out.emit(&report, || {
        format!(
            "authors:  {} written, {} skipped\narticles: {} written, {} skipped",
            report.authors.written,
            report.authors.skipped,
            report.articles.written,
            report.articles.skipped,
        )
    })
}
