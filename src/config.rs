//! Application configuration
//!
//! The browser build always talks to the public Gaia API. Native builds can
//! point elsewhere through `GAIA_API_BASE` (a `.env` file is honoured).

/// Public inspection API
pub const DEFAULT_API_BASE: &str = "https://api.gaia.fantasymaps.org";

/// World pre-filled in the query form
pub const DEFAULT_WORLD: &str = "alaria";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the inspection API, without trailing slash
    pub api_base: String,
    pub default_world: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_world: DEFAULT_WORLD.to_string(),
        }
    }
}

impl AppConfig {
    /// Read overrides from the process environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("GAIA_API_BASE").ok(),
            std::env::var("GAIA_DEFAULT_WORLD").ok(),
        )
    }

    /// Apply optional overrides on top of the defaults. Blank values are ignored.
    pub fn from_vars(api_base: Option<String>, default_world: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = api_base.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(world) = default_world
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
        {
            config.default_world = world.to_string();
        }

        config
    }
}
