use anyhow::{Context, Result};

use crate::analysis::vocabulary::Locale;

/// Application configuration loaded from environment variables.
/// Every variable has a default so the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Locale for the stop-word table. Heuristic rule catalogs stay English.
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            locale: std::env::var("LOCALE")
                .unwrap_or_else(|_| "en".to_string())
                .parse::<Locale>()
                .context("LOCALE must be 'en' or 'es'")?,
        })
    }
}
