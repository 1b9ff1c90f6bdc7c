use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    #[serde(default)]
    pub logs: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    /// Base URL advertised in the call/log links returned by the calls endpoint
    pub public_base_url: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Maximum number of log entries retained in memory
    #[serde(default = "LogConfig::default_capacity")]
    pub capacity: usize,
}

impl LogConfig {
    pub fn default_capacity() -> usize {
        5000
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
