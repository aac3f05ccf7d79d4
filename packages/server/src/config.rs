use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// Remote catalog the planet and people tables are populated from.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL of a SWAPI-compatible API, without trailing slash.
    pub base_url: String,
    /// Number of items requested for the single page fetched per population pass.
    pub page_limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok().and_then(|p| p.parse::<i64>().ok());

        let s = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("database.url", "sqlite:///tmp/holocron.db?mode=rwc")?
            .set_default("catalog.base_url", "https://www.swapi.tech/api")?
            .set_default("catalog.page_limit", 20)?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., HOLOCRON__CATALOG__BASE_URL)
            .add_source(Environment::with_prefix("HOLOCRON").separator("__"))
            // Conventional deployment variables win over everything else
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("server.port", port)?
            .build()?;

        s.try_deserialize()
    }
}
