//! Author records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Author row from the `author` table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Author {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Author {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input for inserting an author with a caller-supplied id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAuthor {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
}

impl NewAuthor {
    pub fn new(id: Uuid, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}
