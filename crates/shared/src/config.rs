//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream price service configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Upstream price-quote service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Exchange rate endpoint, queried once per split request.
    #[serde(default = "default_rates_url")]
    pub rates_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            rates_url: default_rates_url(),
        }
    }
}

fn default_rates_url() -> String {
    "https://api.coinbase.com/v2/exchange-rates".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COINSPLIT").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Returns the `host:port` string the server binds to.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
