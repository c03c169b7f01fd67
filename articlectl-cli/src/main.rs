//! articlectl CLI - author/article data access on PostgreSQL
//!
//! - `run`: the full schema/seed/read/update/delete sequence
//! - `schema`, `seed`: the individual setup steps
//! - `authors`, `articles`: per-entity operations

use std::path::PathBuf;

use anyhow::{Context, Result};
use articlectl_db::config::{load_dotenv, ArticlectlConfig};
use articlectl_db::db;
use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tracing_setup;

use output::Output;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "articlectl",
    author,
    version,
    about = "Author/article data access on PostgreSQL",
    long_about = "Apply an idempotent author/article schema, seed fixed records in one \
                  transaction, and run typed reads, updates and deletes."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Config file (overrides ./articlectl.toml and ~/.articlectl/config.toml)
    #[arg(long, global = true, value_name = "PATH", env = "ARTICLECTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full sequence: schema, seed, reads, update, delete
    Run(commands::run::RunArgs),
    /// Apply the idempotent schema (tables + foreign key)
    Schema(commands::schema::SchemaArgs),
    /// Insert the fixed seed batch in one transaction
    Seed(commands::seed::SeedArgs),
    /// Author operations (list, get, update, soft-delete, restore)
    Authors(commands::authors::AuthorsArgs),
    /// Article operations (list, iterate, get, update, delete, soft-delete, restore)
    Articles(commands::articles::ArticlesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = tracing_setup::init(&TracingConfig { debug: cli.debug }) {
        eprintln!("articlectl: logging disabled: {err}");
    }

    load_dotenv();
    let config =
        ArticlectlConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    let pool = db::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    let out = Output::new(cli.json);
    let default_policy = config.seed.policy();

    match cli.command {
        Commands::Run(args) => {
            commands::run_demo(&pool, args.on_conflict.unwrap_or(default_policy), out).await?
        }
        Commands::Schema(args) => commands::run_schema(&pool, args, out).await?,
        Commands::Seed(args) => {
            commands::run_seed(&pool, args.on_conflict.unwrap_or(default_policy), out).await?
        }
        Commands::Authors(args) => commands::run_authors(&pool, args, out).await?,
        Commands::Articles(args) => commands::run_articles(&pool, args, out).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_conflict_policy() {
        let cli = Cli::try_parse_from(["articlectl", "seed", "--on-conflict", "replace"]).unwrap();
        match cli.command {
            Commands::Seed(args) => {
                assert_eq!(args.on_conflict, Some(articlectl_db::OnConflict::Replace))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        let result = Cli::try_parse_from(["articlectl", "articles", "get", "not-a-uuid"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["articlectl", "authors", "list", "--json", "--active"])
            .unwrap();
        assert!(cli.json);
    }
}
