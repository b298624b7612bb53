use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::time::Duration;

/// Default Katapult Pro API endpoint; v3 paths are joined onto it (e.g. `/api/v3/jobs`)
pub const DEFAULT_BASE_URL: &str = "https://katapultpro.com/api";

/// Minimum spacing between requests allowed by the API's general rate limit
/// (one call per 50ms)
pub const DEFAULT_RATE_LIMIT_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: Secret<String>,
    pub base_url: Option<String>,
    /// Pacing interval; `None` or zero disables pacing
    pub rate_limit: Option<Duration>,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

// Custom Serialize implementation - never expose the API key in serialization
impl Serialize for ClientConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ClientConfig", 5)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field(
            "rate_limit_ms",
            &self.rate_limit.map(|interval| interval.as_millis() as u64),
        )?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.serialize_field("user_agent", &self.user_agent)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ClientConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ClientConfigHelper {
            api_key: String,
            base_url: Option<String>,
            rate_limit_ms: Option<u64>,
            timeout_seconds: Option<u64>,
            user_agent: Option<String>,
        }

        let helper = ClientConfigHelper::deserialize(deserializer)?;
        let mut config = Self::new(helper.api_key);
        config.base_url = helper.base_url;
        config.rate_limit = helper.rate_limit_ms.map(Duration::from_millis);
        if let Some(timeout_seconds) = helper.timeout_seconds {
            config.timeout_seconds = timeout_seconds;
        }
        if let Some(user_agent) = helper.user_agent {
            config.user_agent = user_agent;
        }
        Ok(config)
    }
}

impl ClientConfig {
    /// Create a new configuration with the given API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: None,
            rate_limit: None,
            timeout_seconds: 30,
            user_agent: concat!("katapultpro-rs/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY` (e.g., `KATAPULT_API_KEY`)
    /// - `{PREFIX}_BASE_URL` (optional)
    /// - `{PREFIX}_RATE_LIMIT_MS` (optional, pacing interval in milliseconds)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let prefix = prefix.to_uppercase();
        let api_key_var = format!("{}_API_KEY", prefix);
        let base_url_var = format!("{}_BASE_URL", prefix);
        let rate_limit_var = format!("{}_RATE_LIMIT_MS", prefix);

        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;

        let rate_limit = match env::var(&rate_limit_var) {
            Ok(raw) => Some(raw.parse::<u64>().map(Duration::from_millis).map_err(|e| {
                ConfigError::InvalidConfiguration(format!(
                    "{} must be a number of milliseconds: {}",
                    rate_limit_var, e
                ))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: env::var(&base_url_var).ok(),
            rate_limit,
            ..Self::new(api_key)
        })
    }

    /// Create configuration from a .env file and environment variables
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn from_env_file(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_env_file_with_path(prefix, ".env")
    }

    /// Create configuration from a specific .env file path
    ///
    /// A missing file is not an error; system environment variables are used instead.
    #[cfg(feature = "env-file")]
    pub fn from_env_file_with_path(prefix: &str, env_file_path: &str) -> Result<Self, ConfigError> {
        match dotenv::from_path(env_file_path) {
            Ok(()) => {}
            Err(dotenv::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "Failed to load .env file '{}': {}",
                    env_file_path, e
                )));
            }
        }

        Self::from_env(prefix)
    }

    /// Set custom base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Enable pacing with the given minimum interval between requests
    #[must_use]
    pub const fn rate_limit(mut self, interval: Duration) -> Self {
        self.rate_limit = Some(interval);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is required")]
    MissingApiKey,

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
