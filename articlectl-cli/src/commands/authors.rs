//! Authors command - list, inspect, rename and soft-delete authors

use anyhow::{Context, Result};
use articlectl_db::AuthorRepo;
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use uuid::Uuid;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct AuthorsArgs {
    #[command(subcommand)]
    pub command: AuthorsCommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthorsCommand {
    /// List authors, oldest first
    List {
        /// Hide soft-deleted authors
        #[arg(long)]
        active: bool,
    },
    /// Show one author
    Get {
        /// Author ID
        id: Uuid,
    },
    /// Change an author's name
    Update {
        /// Author ID
        id: Uuid,
        #[arg(long)]
        firstname: String,
        #[arg(long)]
        lastname: String,
    },
    /// Mark an author as deleted (keeps the row)
    SoftDelete {
        /// Author ID
        id: Uuid,
    },
    /// Clear an author's deleted mark
    Restore {
        /// Author ID
        id: Uuid,
    },
}

pub async fn run_authors(pool: &PgPool, args: AuthorsArgs, out: Output) -> Result<()> {
    let repo = AuthorRepo::new(pool);

    match args.command {
        AuthorsCommand::List { active } => {
            let authors = if active {
                repo.list_active().await
            } else {
                repo.list().await
            }
            .context("failed to list authors")?;
            out.authors(&authors)
        }
        AuthorsCommand::Get { id } => {
            let author = repo.get(id).await?;
            out.author(&author)
        }
        AuthorsCommand::Update {
            id,
            firstname,
            lastname,
        } => {
            let rows = repo
                .update_name(id, &firstname, &lastname)
                .await
                .context("failed to update author")?;
            out.rows_affected("update", rows)
        }
        AuthorsCommand::SoftDelete { id } => {
            let rows = repo.soft_delete(id).await?;
            out.rows_affected("soft-delete", rows)
        }
        AuthorsCommand::Restore { id } => {
            let rows = repo.restore(id).await?;
            out.rows_affected("restore", rows)
        }
    }
}
