use anyhow::{Context, Result};
use articlectl_db::db::schema;
use clap::Parser;
use sqlx::PgPool;
use tracing::warn;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// Drop the author and article tables first (destroys all data)
    #[arg(long)]
    pub reset: bool,
}

pub async fn run_schema(pool: &PgPool, args: SchemaArgs, out: Output) -> Result<()> {
    if args.reset {
        warn!("Resetting schema: all authors and articles will be dropped");
        schema::reset(pool).await.context("failed to drop tables")?;
    }
    schema::apply(pool).await.context("failed to apply schema")?;

    out.emit(
        &serde_json::json!({ "schema": "ready", "reset": args.reset }),
        || "schema ready".to_string(),
    )
}
