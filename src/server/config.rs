use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// SMS gateway settings; `None` when `SMS_GATEWAY_URL` is unset or empty.
    pub sms: Option<SmsConfig>,
}

pub struct SmsConfig {
    pub gateway_url: String,
    pub token: String,
    pub sender_id: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let gateway_url = std::env::var("SMS_GATEWAY_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let sms = match gateway_url {
            Some(gateway_url) => Some(SmsConfig {
                gateway_url,
                token: std::env::var("SMS_GATEWAY_TOKEN")
                    .map_err(|_| ConfigError::MissingEnvVar("SMS_GATEWAY_TOKEN".to_string()))?,
                sender_id: std::env::var("SMS_SENDER_ID").ok(),
            }),
            None => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            sms,
        })
    }
}
