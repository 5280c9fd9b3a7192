//! Application configuration loaded from environment variables.
//!
//! A missing or placeholder Supabase URL is not an error: the app runs in a
//! degraded mode where reads serve the static fallback dataset and writes
//! are rejected. Configuration is loaded once at startup and passed in
//! explicitly; there is no global client state.

use std::env;

/// Sentinel URL that marks the backend as unconfigured even when the
/// variable is set (kept for parity with deploy templates that ship it).
pub const PLACEHOLDER_URL: &str = "https://placeholder.supabase.co";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL
    pub supabase_url: String,
    /// Supabase anon key used for both apikey and bearer headers
    pub supabase_anon_key: String,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only: backend unconfigured.
    fn default() -> Self {
        Self {
            supabase_url: PLACEHOLDER_URL.to_string(),
            supabase_anon_key: String::new(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All values have defaults; absent Supabase credentials simply leave
    /// the backend unconfigured.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            supabase_url: env::var("SUPABASE_URL")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| PLACEHOLDER_URL.to_string()),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        }
    }

    /// Whether a live backend connection is available.
    ///
    /// True only when both the URL and the key are present and the URL is
    /// not the placeholder sentinel.
    pub fn is_backend_configured(&self) -> bool {
        !self.supabase_url.is_empty()
            && !self.supabase_anon_key.is_empty()
            && self.supabase_url != PLACEHOLDER_URL
    }
}
