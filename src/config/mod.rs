use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub razorpay: RazorpayConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Exact origins allowed to call the API. Empty means every origin
    /// is allowed (credentials are permitted either way).
    pub allowed_origins: Vec<String>,
}

impl RazorpayConfig {
    /// Names of the credential variables that are not set. Startup warns
    /// on these instead of failing; the first order attempt then fails
    /// when the gateway rejects the empty credentials.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.key_id.is_empty() {
            missing.push("RAZORPAY_KEY_ID");
        }
        if self.key_secret.is_empty() {
            missing.push("RAZORPAY_KEY_SECRET");
        }
        missing
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("_").try_parsing(true))
            .build()?;

        // Manual construction due to environment variable naming
        Ok(Config {
            server: ServerConfig {
                host: config.get_string("host").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: config.get_int("port").unwrap_or(4000) as u16,
            },
            razorpay: RazorpayConfig {
                key_id: config.get_string("razorpay.key.id").unwrap_or_default(),
                key_secret: config.get_string("razorpay.key.secret").unwrap_or_default(),
            },
            cors: CorsConfig {
                allowed_origins: config
                    .get_string("allowed.origins")
                    .map(|raw| {
                        raw.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

pub type SharedConfig = Arc<Config>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_reports_unset_credentials() {
        let razorpay = RazorpayConfig {
            key_id: String::new(),
            key_secret: String::new(),
        };
        assert_eq!(
            razorpay.missing_keys(),
            vec!["RAZORPAY_KEY_ID", "RAZORPAY_KEY_SECRET"]
        );
    }

    #[test]
    fn from_env_defaults_host_and_port() {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn missing_keys_is_empty_when_configured() {
        let razorpay = RazorpayConfig {
            key_id: "rzp_test_key".to_string(),
            key_secret: "secret".to_string(),
        };
        assert!(razorpay.missing_keys().is_empty());
    }
}
