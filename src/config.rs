use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// GitHub API token; absent means unauthenticated (lower rate limit) access
    pub github_token: Option<String>,
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
    /// Directory the bundled client application is served from
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string());

        Ok(Self {
            host,
            port,
            github_token,
            github_api_url,
            static_dir,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the environment mutations cannot race each other.
    #[test]
    fn test_from_env() {
        env::remove_var("PORT");
        env::remove_var("GITHUB_API_URL");
        let config = Config::from_env().expect("config should load without env vars");
        assert_eq!(config.port, 3000);
        assert_eq!(config.github_api_url, "https://api.github.com");

        env::set_var("GITHUB_TOKEN", "");
        let config = Config::from_env().expect("config should load");
        assert!(config.github_token.is_none(), "empty token treated as unset");
        env::remove_var("GITHUB_TOKEN");

        env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        env::remove_var("PORT");
        assert!(matches!(result, Err(ConfigError::InvalidValue("PORT"))));
    }
}
