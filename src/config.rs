use std::env;
use std::time::Duration;

use crate::analysis_result::ResultShape;
use crate::errors::ConfigError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const TIMEOUT_VAR: &str = "LLM_TIMEOUT_SECS";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const CORS_VAR: &str = "CORS_ALLOWED_ORIGINS";
pub const RESULT_SHAPE_VAR: &str = "RESULT_SHAPE";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `*` or a comma-separated origin list
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: "*".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// process-wide settings, read once at startup and never mutated
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    pub result_shape: ResultShape,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// builds the config from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    key: TIMEOUT_VAR,
                    value,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let port = match get(PORT_VAR) {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: PORT_VAR,
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let result_shape = match get(RESULT_SHAPE_VAR) {
            Some(value) => ResultShape::from_name(&value).ok_or(ConfigError::Invalid {
                key: RESULT_SHAPE_VAR,
                value,
            })?,
            None => ResultShape::default(),
        };

        Ok(Self {
            llm: LlmConfig {
                api_key,
                model: get(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            server: ServerConfig {
                host: get(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
                cors_allowed_origins: get(CORS_VAR).unwrap_or_else(|| "*".to_string()),
            },
            result_shape,
        })
    }
}

/// loads `.env` when present; only a broken file is worth a warning
pub fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        match e {
            dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {}
            _ => eprintln!("warning: failed to load .env file: {}", e),
        }
    }
}
