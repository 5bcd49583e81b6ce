use serde::Serialize;

/// Configuration that is safe to hand to a browser client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub backend_api_url: String,
    pub frontend_api_url: String,
    pub app_name: String,
    pub app_version: String,
}

impl PublicConfig {
    pub fn from_env() -> Self {
        Self {
            backend_api_url: std::env::var("BACKEND_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            frontend_api_url: std::env::var("FRONTEND_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api".to_string()),
            app_name: std::env::var("APP_NAME").unwrap_or_else(|_| "WebMark".to_string()),
            app_version: std::env::var("APP_VERSION").unwrap_or_else(|_| "1.0.0".to_string()),
        }
    }
}

/// Server-only configuration. Not serializable on purpose: route handlers may
/// report whether a value is configured, never the value itself.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_secret_key: Option<String>,
    pub database_url: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            api_secret_key: std::env::var("API_SECRET_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            database_url: std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn has_api_secret(&self) -> bool {
        self.api_secret_key.is_some()
    }
}

pub fn environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

pub fn is_development() -> bool {
    environment() == "development"
}

pub fn is_production() -> bool {
    environment() == "production"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_config_falls_back_to_defaults() {
        // single test touches the process environment, keep it self-contained
        std::env::remove_var("BACKEND_API_URL");
        std::env::remove_var("FRONTEND_API_URL");
        std::env::remove_var("APP_NAME");
        std::env::remove_var("APP_VERSION");

        let config = PublicConfig::from_env();
        assert_eq!(config.backend_api_url, "http://localhost:8080/api");
        assert_eq!(config.frontend_api_url, "http://localhost:3000/api");
        assert_eq!(config.app_name, "WebMark");
        assert_eq!(config.app_version, "1.0.0");
    }

    #[test]
    fn empty_secret_counts_as_unset() {
        let config = ServerConfig {
            api_secret_key: None,
            database_url: None,
        };
        assert!(!config.has_api_secret());

        let config = ServerConfig {
            api_secret_key: Some("sk-123".to_string()),
            database_url: None,
        };
        assert!(config.has_api_secret());
    }

    #[test]
    fn public_config_serializes_camel_case() {
        let config = PublicConfig {
            backend_api_url: "http://localhost:8080/api".to_string(),
            frontend_api_url: "http://localhost:3000/api".to_string(),
            app_name: "WebMark".to_string(),
            app_version: "1.0.0".to_string(),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.get("backendApiUrl").is_some());
        assert!(value.get("frontendApiUrl").is_some());
        assert!(value.get("appName").is_some());
        assert!(value.get("appVersion").is_some());
    }
}
