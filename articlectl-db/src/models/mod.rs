//! Row types and insert inputs

pub mod article;
pub mod author;
pub mod conflict;

pub use article::{Article, NewArticle};
pub use author::{Author, NewAuthor};
pub use conflict::OnConflict;
