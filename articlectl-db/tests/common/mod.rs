//! Shared setup for database integration tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p articlectl-db -- --ignored

use std::sync::OnceLock;

use articlectl_db::db::{create_pool, schema};
use articlectl_db::{NewArticle, NewAuthor};
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Tests share one database and `schema --reset` drops tables, so they run one at a time.
static DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub struct TestDb {
    pub pool: PgPool,
    _guard: MutexGuard<'static, ()>,
}

pub async fn setup() -> TestDb {
    let guard = DB_LOCK.get_or_init(|| Mutex::new(())).lock().await;
    let _ = tracing_subscriber::fmt()
        .with_env_filter("articlectl_db=debug")
        .with_test_writer()
        .try_init();

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool creation failed");
    schema::apply(&pool).await.expect("schema apply failed");

    TestDb {
        pool,
        _guard: guard,
    }
}

pub fn author(firstname: &str) -> NewAuthor {
    NewAuthor::new(Uuid::new_v4(), firstname, "Tester")
}

/// Article with a title no other test run will produce.
pub fn article(author_id: Option<Uuid>) -> NewArticle {
    let id = Uuid::new_v4();
    NewArticle::new(id, format!("Title {id}"), "Body", author_id)
}

pub async fn author_rows(pool: &PgPool, id: Uuid) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM author WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("count query failed");
    count
}

pub async fn title_rows(pool: &PgPool, title: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM article WHERE title = $1")
        .bind(title)
        .fetch_one(pool)
        .await
        .expect("count query failed");
    count
}
