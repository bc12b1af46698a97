use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// RAWG game catalog API key (`API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Chat completion API key (`OPENAI_API_KEY`)
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// RAWG API base URL
    #[serde(default = "default_rawg_api_url")]
    pub rawg_api_url: String,

    /// Chat completion API base URL
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_rawg_api_url() -> String {
    "https://api.rawg.io/api".to_string()
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Names of the credentials that are unset or blank
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.api_key) {
            missing.push("API_KEY");
        }
        if is_blank(&self.openai_api_key) {
            missing.push("OPENAI_API_KEY");
        }
        missing
    }

    /// Logs one warning per missing credential. Startup continues regardless.
    pub fn warn_missing_credentials(&self) {
        for name in self.missing_credentials() {
            tracing::warn!(variable = name, "{} environment variable not set", name);
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}
