//! Command implementations for articlectl CLI

pub mod articles;
pub mod authors;
pub mod run;
pub mod schema;
pub mod seed;

pub use articles::run_articles;
pub use authors::run_authors;
pub use run::run_demo;
pub use schema::run_schema;
pub use seed::run_seed;
