//! Application configuration
//!
//! Bind address and database location come from the environment, with
//! constants for the defaults.

use std::path::PathBuf;

/// Default address the server listens on
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Default SQLite database file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "keepnote.db";

/// Server configuration resolved at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub db_path: PathBuf,
}

impl Config {
    /// Read configuration from `KEEPNOTE_BIND` and `KEEPNOTE_DB`,
    /// falling back to the defaults.
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("KEEPNOTE_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let db_path = std::env::var("KEEPNOTE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));

        Self { bind_addr, db_path }
    }
}
