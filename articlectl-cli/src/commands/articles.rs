//! Articles command - list, fetch, update and delete articles

use anyhow::{Context, Result};
use articlectl_db::ArticleRepo;
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use uuid::Uuid;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct ArticlesArgs {
    #[command(subcommand)]
    pub command: ArticlesCommand,
}

#[derive(Subcommand, Debug)]
pub enum ArticlesCommand {
    /// List articles, oldest first
    List {
        /// Hide soft-deleted articles
        #[arg(long, conflicts_with = "author")]
        active: bool,
        /// Only articles by this author ID
        #[arg(long)]
        author: Option<Uuid>,
    },
    /// Walk every article through a row cursor
    Iterate,
    /// Show one article
    Get {
        /// Article ID
        id: Uuid,
    },
    /// Replace an article's title and body
    Update {
        /// Article ID
        id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: String,
    },
    /// Permanently delete an article
    Delete {
        /// Article ID
        id: Uuid,
    },
    /// Mark an article as deleted (keeps the row)
    SoftDelete {
        /// Article ID
        id: Uuid,
    },
    /// Clear an article's deleted mark
    Restore {
        /// Article ID
        id: Uuid,
    },
}

pub async fn run_articles(pool: &PgPool, args: ArticlesArgs, out: Output) -> Result<()> {
    let repo = ArticleRepo::new(pool);

    match args.command {
        ArticlesCommand::List { active, author } => {
            let articles = match (active, author) {
                (_, Some(author_id)) => repo.list_by_author(author_id).await,
                (true, None) => repo.list_active().await,
                (false, None) => repo.list().await,
            }
            .context("failed to list articles")?;
            out.articles(&articles)
        }
        ArticlesCommand::Iterate => {
            let articles = repo.iterate().await.context("article cursor failed")?;
            out.articles(&articles)
        }
        ArticlesCommand::Get { id } => {
            let article = repo.get(id).await?;
            out.article(&article)
        }
        ArticlesCommand::Update { id, title, body } => {
            let rows = repo
                .update(id, &title, &body)
                .await
                .context("failed to update article")?;
            out.rows_affected("update", rows)
        }
        ArticlesCommand::Delete { id } => {
            let rows = repo.delete(id).await.context("failed to delete article")?;
            out.rows_affected("delete", rows)
        }
        ArticlesCommand::SoftDelete { id } => {
            let rows = repo.soft_delete(id).await?;
            out.rows_affected("soft-delete", rows)
        }
        ArticlesCommand::Restore { id } => {
            let rows = repo.restore(id).await?;
            out.rows_affected("restore", rows)
        }
    }
}
