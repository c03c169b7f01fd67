//! Insert conflict policy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What an insert does when it hits a primary-key or unique constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnConflict {
    /// Leave the existing row untouched, report 0 rows affected.
    #[default]
    Ignore,
    /// Surface the violation as [`crate::Error::Conflict`].
    Error,
    /// Overwrite the data columns of the row with the same id.
    Replace,
}

impl OnConflict {
    pub const ALL: [OnConflict; 3] = [Self::Ignore, Self::Error, Self::Replace];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Error => "error",
            Self::Replace => "replace",
        }
    }

    /// Trailing `ON CONFLICT` clause for an insert into a table keyed by `id`.
    ///
    /// `replace_set` is the `SET` list used by [`OnConflict::Replace`].
    pub(crate) fn clause(&self, replace_set: &str) -> String {
        match self {
            Self::Ignore => " ON CONFLICT DO NOTHING".to_string(),
            Self::Error => String::new(),
            Self::Replace => format!(
                " ON CONFLICT (id) DO UPDATE SET {}, updated_at = NOW()",
                replace_set
            ),
        }
    }
}

impl fmt::Display for OnConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OnConflict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "error" => Ok(Self::Error),
            "replace" => Ok(Self::Replace),
            other => Err(format!(
                "invalid conflict policy '{}' (expected ignore, error or replace)",
                other
            )),
        }
    }
}
