//! Runtime configuration read from the environment.
//!
//! Every variable is optional. An empty value counts as unset, so
//! `PORT=` behaves like no `PORT` at all.

use anyhow::{anyhow, Context, Result};
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_NAME: &str = "manga_db";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address to bind to (`HOST`).
    pub host: String,
    /// Port to bind to (`PORT`).
    pub port: u16,
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// Full connection URL (`DATABASE_URL`). Takes precedence over the `DB_*` parts.
    pub database_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_host: DEFAULT_DB_HOST.to_string(),
            db_user: DEFAULT_DB_USER.to_string(),
            db_password: String::new(),
            db_name: DEFAULT_DB_NAME.to_string(),
            database_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(p) => p
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", p))?,
            None => defaults.port,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            db_host: var("DB_HOST").unwrap_or(defaults.db_host),
            db_user: var("DB_USER").unwrap_or(defaults.db_user),
            db_password: var("DB_PASSWORD").unwrap_or(defaults.db_password),
            db_name: var("DB_NAME").unwrap_or(defaults.db_name),
            database_url: var("DATABASE_URL"),
        })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection URL for the pool, `DATABASE_URL` or a MySQL URL built from
    /// the `DB_*` parts.
    pub fn database_url(&self) -> Result<String> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let mut url = Url::parse("mysql://localhost")?;
        url.set_host(Some(&self.db_host))
            .with_context(|| format!("invalid DB_HOST {:?}", self.db_host))?;
        url.set_username(&self.db_user)
            .map_err(|_| anyhow!("invalid DB_USER {:?}", self.db_user))?;
        if !self.db_password.is_empty() {
            url.set_password(Some(&self.db_password))
                .map_err(|_| anyhow!("invalid DB_PASSWORD"))?;
        }
        url.set_path(&self.db_name);

        Ok(url.to_string())
    }
}
