//! Article records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Article row from the `article` table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input for inserting an article with a caller-supplied id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewArticle {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
}

impl NewArticle {
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            author_id,
        }
    }
}
