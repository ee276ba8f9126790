//! Build-time configuration
//!
//! Values are baked in by the bundler's environment (`option_env!`), with
//! logged defaults for anything missing.

use log::{info, warn};
use log::LevelFilter;

use market_core::MarketError;

pub const SUPABASE_URL_KEY: &str = "IDEA_MARKET_SUPABASE_URL";
pub const ANON_KEY_KEY: &str = "IDEA_MARKET_SUPABASE_ANON_KEY";
pub const AUTH_STORAGE_KEY: &str = "IDEA_MARKET_AUTH_STORAGE_KEY";
pub const LOG_KEY: &str = "IDEA_MARKET_LOG";

const DEFAULT_AUTH_STORAGE: &str = "supabase.auth.token";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Project URL without trailing slash
    pub supabase_url: String,
    pub anon_key: String,
    /// localStorage key holding the auth client's session JSON
    pub auth_storage_key: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| match key {
            SUPABASE_URL_KEY => option_env!("IDEA_MARKET_SUPABASE_URL"),
            ANON_KEY_KEY => option_env!("IDEA_MARKET_SUPABASE_ANON_KEY"),
            AUTH_STORAGE_KEY => option_env!("IDEA_MARKET_AUTH_STORAGE_KEY"),
            LOG_KEY => option_env!("IDEA_MARKET_LOG"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let var = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());
        Self {
            supabase_url: var(SUPABASE_URL_KEY)
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            anon_key: var(ANON_KEY_KEY).unwrap_or_default().to_string(),
            auth_storage_key: var(AUTH_STORAGE_KEY)
                .unwrap_or(DEFAULT_AUTH_STORAGE)
                .to_string(),
            log_level: var(LOG_KEY)
                .map(console_logger::parse_level)
                .unwrap_or(LevelFilter::Info),
        }
    }

    /// Fails when the backend cannot be reached at all.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.supabase_url.is_empty() {
            return Err(MarketError::Config(format!("{SUPABASE_URL_KEY} is not set")));
        }
        if self.anon_key.is_empty() {
            return Err(MarketError::Config(format!("{ANON_KEY_KEY} is not set")));
        }
        Ok(())
    }

    /// Log the resolved configuration once the logger is up.
    pub fn report(&self) {
        match self.validate() {
            Ok(()) => info!("backend: {}", self.supabase_url),
            Err(e) => warn!("{e}; backend calls will fail"),
        }
        info!("auth session key: {}", self.auth_storage_key);
    }
}
