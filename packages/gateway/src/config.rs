use std::path::PathBuf;

use axum::http::HeaderValue;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/config";

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. Empty means any origin.
    #[serde(default)]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

fn default_cors_max_age() -> u64 {
    3600
}

impl CorsConfig {
    /// Parsed `allow_origins`. Fails on the first origin that is not a valid header value.
    pub fn origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allow_origins
            .iter()
            .map(|origin| {
                origin.parse().map_err(|_| {
                    ConfigError::Message(format!("invalid CORS origin {origin:?}"))
                })
            })
            .collect()
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origins: Vec::new(),
            max_age: default_cors_max_age(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// How the external classifier is launched.
#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    /// Executable to spawn. Default: "java".
    #[serde(default = "default_program")]
    pub program: String,
    /// Fixed arguments (classpath and entry point). Default: `-cp classifier/classes Demo`.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Also append the submission as the last argument. The submission is
    /// always written to stdin regardless. Default: false.
    #[serde(default)]
    pub pass_code_as_arg: bool,
    /// Working directory for the child process. Default: inherit.
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    /// Kill the child and fail the request after this many seconds. Default: no limit.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Upper bound on simultaneously running classifier processes. Requests
    /// beyond the bound wait for a slot. Default: unbounded.
    #[serde(default)]
    pub max_concurrent: Option<usize>,
}

fn default_program() -> String {
    "java".into()
}
fn default_args() -> Vec<String> {
    vec!["-cp".into(), "classifier/classes".into(), "Demo".into()]
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            pass_code_as_arg: false,
            working_dir: None,
            timeout_secs: None,
            max_concurrent: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = config_path(std::env::var("CLASSIFIER_CONFIG").ok());
        Self::from_sources(&config_path, Environment::with_prefix("CLASSIFIER"))
    }

    /// Defaults, then the file at `config_path` (if any), then `env`.
    fn from_sources(config_path: &str, env: Environment) -> Result<Self, ConfigError> {
        let config: Self = Self::with_defaults()?
            .add_source(File::with_name(config_path).required(false))
            // e.g. CLASSIFIER__SERVER__PORT
            .add_source(env.separator("__"))
            .build()?
            .try_deserialize()?;

        config.server.cors.origins()?;
        Ok(config)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 20501)?
            .set_default("classifier.program", "java")
    }
}

fn config_path(from_env: Option<String>) -> String {
    from_env.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}
