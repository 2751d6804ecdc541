//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use tracing::warn;

use jotter_core::{defaults, Error, GenerationBackend, Result};
use jotter_db::PoolConfig;
use jotter_inference::{GeminiBackend, GeminiConfig, OpenAIBackend, OpenAIConfig, Summarizer};

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Word limit for summarization input.
    pub max_words: usize,
    pub openai: OpenAIConfig,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_tokens: usize = parse_or(&var, "MAX_TOKENS", defaults::MAX_TOKENS);
        if max_tokens == 0 {
            return Err(Error::Config("MAX_TOKENS must be greater than zero".to_string()));
        }
        let max_output = u32::try_from(max_tokens)
            .map_err(|_| Error::Config(format!("MAX_TOKENS {} is too large", max_tokens)))?;

        let mut timeout_seconds: u64 =
            parse_or(&var, "SUMMARY_TIMEOUT_SECS", defaults::SUMMARY_TIMEOUT_SECS);
        if timeout_seconds == 0 {
            warn!(
                subsystem = "config",
                key = "SUMMARY_TIMEOUT_SECS",
                default = defaults::SUMMARY_TIMEOUT_SECS,
                "Timeout must be positive, using default"
            );
            timeout_seconds = defaults::SUMMARY_TIMEOUT_SECS;
        }

        let openai = OpenAIConfig {
            base_url: var("OPENAI_BASE_URL")
                .or_else(|| var("OPEN_API_URL"))
                .unwrap_or_else(|| defaults::OPENAI_URL.to_string()),
            api_key: var("OPENAI_API_KEY"),
            gen_model: var("OPENAI_GEN_MODEL")
                .unwrap_or_else(|| defaults::OPENAI_GEN_MODEL.to_string()),
            max_tokens: max_output,
            timeout_seconds,
        };

        let gemini = GeminiConfig {
            base_url: var("GEMINI_API_URL").unwrap_or_else(|| defaults::GEMINI_URL.to_string()),
            api_key: var("GEMINI_API_KEY"),
            gen_model: var("GEMINI_GEN_MODEL")
                .unwrap_or_else(|| defaults::GEMINI_GEN_MODEL.to_string()),
            max_tokens: max_output,
            timeout_seconds,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| defaults::HOST.to_string()),
            port: parse_or(&var, "PORT", defaults::PORT),
            database_url: var("DATABASE_URL")
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            db_max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", defaults::DB_MAX_CONNECTIONS),
            max_words: max_tokens,
            openai,
            gemini,
        })
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid listen address: {}", e)))
    }

    /// Pool settings for the database layer.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(self.db_max_connections)
    }

    /// Build the primary/secondary summarizer chain.
    pub fn build_summarizer(&self) -> Result<Summarizer> {
        let primary: Arc<dyn GenerationBackend> =
            Arc::new(OpenAIBackend::new(self.openai.clone())?);
        let secondary: Arc<dyn GenerationBackend> =
            Arc::new(GeminiBackend::new(self.gemini.clone())?);
        Ok(Summarizer::new(vec![primary, secondary], self.max_words))
    }
}

/// Parse `key` or fall back to `default`, warning when a value is present but invalid.
fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match var(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    subsystem = "config",
                    key,
                    value = %raw,
                    default = %default,
                    "Invalid value, using default"
                );
                default
            }
        },
    }
}
