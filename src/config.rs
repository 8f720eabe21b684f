use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to a JSON catalog seed file; built-in demo data is used when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Number of past recommendations kept for repeat avoidance
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Number of alternate picks returned alongside each recommendation
    #[serde(default = "default_alternate_count")]
    pub alternate_count: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_history_window() -> usize {
    10
}

fn default_alternate_count() -> usize {
    3
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
