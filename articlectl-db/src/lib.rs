//! articlectl-db: author/article data access on PostgreSQL
//!
//! Idempotent schema, a transactional seed batch with an explicit conflict
//! policy, typed reads, and update/delete/soft-delete operations.

pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod models;
pub mod seed;

pub use config::{ArticlectlConfig, DatabaseConfig};
pub use db::{ArticleRepo, AuthorRepo};
pub use error::{Error, Result};
pub use models::{Article, Author, NewArticle, NewAuthor, OnConflict};
