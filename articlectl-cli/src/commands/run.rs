//! Run command - the full schema/seed/read/update/delete sequence

use anyhow::{Context, Result};
use articlectl_db::demo::{self, DemoReport};
use articlectl_db::OnConflict;
use clap::Parser;
use sqlx::PgPool;

use crate::output::{article_detail, article_line, author_detail, Output};

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Conflict policy for the seed inserts: ignore, error or replace
    #[arg(long, value_name = "POLICY")]
    pub on_conflict: Option<OnConflict>,
}

pub async fn run_demo(pool: &PgPool, policy: OnConflict, out: Output) -> Result<()> {
    let report = demo::run(pool, policy)
        .await
        .context("demo routine failed")?;
    out.emit(&report, || render(&report))
}

fn render(report: &DemoReport) -> String {
    let mut lines = vec![format!(
        "seed -> authors written {} skipped {}, articles written {} skipped {}",
        report.seed.authors.written,
        report.seed.authors.skipped,
        report.seed.articles.written,
        report.seed.articles.skipped,
    )];

    for (i, author) in report.authors.iter().enumerate() {
        lines.push(format!("author[{}] ->\n{}", i, author_detail(author)));
    }

    lines.push(format!("article1 ->\n{}", article_detail(&report.fetched)));

    for (i, article) in report.iterated.iter().enumerate() {
        lines.push(format!("{} a -> {}", i + 1, article_line(article)));
    }

    lines.push(format!("update -> {} row(s) affected", report.updated_rows));
    lines.push(format!("updated ->\n{}", article_detail(&report.updated)));
    lines.push(format!("delete -> {} row(s) affected", report.deleted_rows));
    lines.join("\n")
}
