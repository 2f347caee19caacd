use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub agent: AgentConfig,
    pub server: ServerConfig,
    pub join: JoinConfig,
    pub transport: TransportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Name advertised to the server at join.
    pub name: String,
    pub ip: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinConfig {
    pub retries: u32,
    pub delay_ms: u64,
    pub delay_multiplier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    pub reply_timeout_ms: u64,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent: AgentConfig {
                name: "PerimeterSniper".to_string(),
                ip: "127.0.0.1".to_string(),
                port: 20010,
            },
            server: ServerConfig {
                ip: "127.0.0.1".to_string(),
                port: 20000,
            },
            join: JoinConfig {
                retries: 300,
                delay_ms: 1000,
                delay_multiplier: 1.0,
            },
            transport: TransportConfig {
                reply_timeout_ms: 2000,
            },
        }
    }
}
