//! Configuration module for the factory API.
//!
//! Loads configuration from YAML files and environment variables. The
//! resulting [`Config`] is built once at startup and handed to the router.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub docs: DocsConfig,
    pub api: ApiConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Interactive documentation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    /// Path the Swagger UI is mounted under.
    pub swagger_path: String,
    /// Path the generated OpenAPI document is served from.
    pub openapi_path: String,
}

/// Request handling configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Reject create payloads that miss required fields or carry mistyped
    /// values. When off, every payload is echoed back as submitted.
    #[serde(default)]
    pub strict_validation: bool,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FACTORY_*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let config = ConfigLoader::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("docs.swagger_path", defaults.docs.swagger_path)?
            .set_default("docs.openapi_path", defaults.docs.openapi_path)?
            .set_default("api.strict_validation", defaults.api.strict_validation)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables with FACTORY_ prefix
            .add_source(
                Environment::with_prefix("FACTORY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            swagger_path: "/swagger-ui".to_string(),
            openapi_path: "/api-docs/openapi.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.docs.swagger_path, "/swagger-ui");
        assert_eq!(config.docs.openapi_path, "/api-docs/openapi.json");
        assert!(!config.api.strict_validation);
    }

    #[test]
    fn test_deserialize_partial_api_section() {
        let api: ApiConfig = serde_json::from_str("{}").unwrap();
        assert!(!api.strict_validation);
    }
}
