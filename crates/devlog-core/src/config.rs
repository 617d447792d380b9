//! Configuration module
//!
//! Environment-driven configuration for the devlog service: the HTTP
//! server, the headless content store backing the devlog listing, and
//! the media CDN account used for image/video delivery. Everything is
//! read once at process start and never mutated afterwards.

use std::env;

// Common constants
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_SANITY_DATASET: &str = "production";
const DEFAULT_SANITY_API_VERSION: &str = "2025-12-09";

/// HTTP server settings.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Connection settings for the headless content store.
#[derive(Clone, Debug)]
pub struct ContentStoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    /// Query through the store's cached edge host for faster public reads.
    pub use_cdn: bool,
    /// Bearer token for private datasets. Public reads need none.
    pub api_token: Option<String>,
}

/// Account settings for the media delivery CDN.
///
/// `cloud_name` is optional: without it the URL builder produces empty
/// strings and callers render no media element.
#[derive(Clone, Debug, Default)]
pub struct MediaDeliveryConfig {
    pub cloud_name: Option<String>,
}

/// Application configuration, read once from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub content_store: ContentStoreConfig,
    pub media: MediaDeliveryConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let config = Config {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
                cors_origins,
                environment,
            },
            content_store: ContentStoreConfig {
                project_id: env::var("SANITY_PROJECT_ID")
                    .map_err(|_| anyhow::anyhow!("SANITY_PROJECT_ID must be set"))?,
                dataset: env::var("SANITY_DATASET")
                    .unwrap_or_else(|_| DEFAULT_SANITY_DATASET.to_string()),
                api_version: env::var("SANITY_API_VERSION")
                    .unwrap_or_else(|_| DEFAULT_SANITY_API_VERSION.to_string()),
                use_cdn: env::var("SANITY_USE_CDN")
                    .unwrap_or_else(|_| "true".to_string())
                    .to_lowercase()
                    .parse()
                    .unwrap_or(true),
                api_token: env::var("SANITY_API_TOKEN").ok().filter(|s| !s.is_empty()),
            },
            media: MediaDeliveryConfig {
                cloud_name: env::var("CLOUDINARY_CLOUD_NAME")
                    .ok()
                    .filter(|s| !s.is_empty()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.server.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.server.cors_origins.iter().any(|o| o.trim() == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.content_store.project_id.trim().is_empty() {
            return Err(anyhow::anyhow!("SANITY_PROJECT_ID cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(environment: &str, cors_origins: Vec<&str>) -> Config {
        Config {
            server: ServerConfig {
                port: 4000,
                cors_origins: cors_origins.into_iter().map(String::from).collect(),
                environment: environment.to_string(),
            },
            content_store: ContentStoreConfig {
                project_id: "abc123".to_string(),
                dataset: "production".to_string(),
                api_version: "2025-12-09".to_string(),
                use_cdn: true,
                api_token: None,
            },
            media: MediaDeliveryConfig { cloud_name: None },
        }
    }

    #[test]
    fn test_wildcard_cors_allowed_in_development() {
        let config = config_with("development", vec!["*"]);
        assert!(config.validate().is_ok());
        assert!(!config.is_production());
    }

    #[test]
    fn test_wildcard_cors_rejected_in_production() {
        let config = config_with("production", vec!["*"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_origins_allowed_in_production() {
        let config = config_with("production", vec!["https://studio.example"]);
        assert!(config.validate().is_ok());
        assert!(config.is_production());
    }

    #[test]
    fn test_empty_project_id_rejected() {
        let mut config = config_with("development", vec!["*"]);
        config.content_store.project_id = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
