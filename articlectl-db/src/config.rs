use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use tracing::{debug, info, warn};

use crate::models::OnConflict;
use crate::{Error, Result};

/// Name of the local config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "articlectl.toml";

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.articlectl/.env
pub fn load_dotenv() {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path.display().to_string());
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            // dotenvy never overwrites variables that are already set
            match dotenvy::from_path(&env_file) {
                Ok(()) => loaded_from.push(env_file.display().to_string()),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.articlectl)");
    } else {
        info!("Loaded environment from: {}", loaded_from.join(", "));
    }
}

/// Get the articlectl config directory path (~/.articlectl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".articlectl"))
}

// ============================================================================
// TOML Configuration
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ArticlectlConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

/// Connection settings.
///
/// Either `url` or the discrete fields; `url` wins when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub dbname: Option<String>,

    /// disable, allow, prefer, require, verify-ca or verify-full
    #[serde(default)]
    pub sslmode: Option<String>,

    /// Pool size; unset means [`DEFAULT_MAX_CONNECTIONS`]
    #[serde(default)]
    pub max_connections: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SeedConfig {
    /// Unset means [`OnConflict::default`]
    #[serde(default)]
    pub on_conflict: Option<OnConflict>,
}

/// Pool size when no config file sets one
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

impl SeedConfig {
    pub fn policy(&self) -> OnConflict {
        self.on_conflict.unwrap_or_default()
    }
}

impl ArticlectlConfig {
    /// Load config from TOML files and the environment
    ///
    /// Priority order (highest to lowest):
    /// 1. `DATABASE_URL` environment variable (URL only)
    /// 2. `explicit` path, if given (must exist and parse)
    /// 3. ./articlectl.toml
    /// 4. ~/.articlectl/config.toml
    /// 5. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = ArticlectlConfig::default();

        if let Some(global_path) = config_dir().map(|d| d.join("config.toml")) {
            if let Some(global) = Self::read_optional(&global_path) {
                config = Self::merge(config, global);
            }
        }

        if let Some(local) = Self::read_optional(Path::new(LOCAL_CONFIG_FILE)) {
            config = Self::merge(config, local);
        }

        if let Some(path) = explicit {
            config = Self::merge(config, Self::from_file(path)?);
        }

        config.apply_overrides(std::env::var("DATABASE_URL").ok());
        Ok(config)
    }

    /// Parse a config file that is required to exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents).map_err(|e| Error::toml(path, e))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Discovered config files are best-effort: a broken one is logged and skipped.
    fn read_optional(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Environment wins over files for the connection URL.
    pub fn apply_overrides(&mut self, database_url: Option<String>) {
        if let Some(url) = database_url.filter(|u| !u.trim().is_empty()) {
            debug!("Using DATABASE_URL from environment");
            self.database.url = Some(url);
        }
    }

    /// Merge two configs (right overrides left, field by field)
    ///
    /// Every file-level field is optional so an overlay that omits a key
    /// keeps the base value. Defaults are resolved by the accessors.
    fn merge(base: Self, overlay: Self) -> Self {
        let b = base.database;
        let o = overlay.database;
        Self {
            database: DatabaseConfig {
                url: o.url.or(b.url),
                host: o.host.or(b.host),
                port: o.port.or(b.port),
                user: o.user.or(b.user),
                password: o.password.or(b.password),
                dbname: o.dbname.or(b.dbname),
                sslmode: o.sslmode.or(b.sslmode),
                max_connections: o.max_connections.or(b.max_connections),
            },
            seed: SeedConfig {
                on_conflict: overlay.seed.on_conflict.or(base.seed.on_conflict),
            },
        }
    }
}

impl DatabaseConfig {
    pub fn pool_size(&self) -> u32 {
        self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    fn has_discrete_fields(&self) -> bool {
        self.host.is_some()
            || self.port.is_some()
            || self.user.is_some()
            || self.password.is_some()
            || self.dbname.is_some()
    }

    /// Build sqlx connect options from whichever form is configured.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            let mut options = PgConnectOptions::from_str(url)?;
            if let Some(mode) = &self.sslmode {
                options = options.ssl_mode(PgSslMode::from_str(mode)?);
            }
            return Ok(options);
        }

        if !self.has_discrete_fields() {
            return Err(Error::config(
                "no database configured: set DATABASE_URL or a [database] section in articlectl.toml",
            ));
        }

        let mut options = PgConnectOptions::new();
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(port) = self.port {
            options = options.port(port);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(dbname) = &self.dbname {
            options = options.database(dbname);
        }
        if let Some(mode) = &self.sslmode {
            options = options.ssl_mode(PgSslMode::from_str(mode)?);
        }
        Ok(options)
    }
}
