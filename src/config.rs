use serde::Deserialize;

use crate::services::{DiversityConfig, DEFAULT_MATCH_COUNT};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Comma-separated list of origins allowed to call the API
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Niche-to-generic category ratio needed before diversity kicks in
    #[serde(default = "default_diversity_min_ratio")]
    pub diversity_min_ratio: f64,

    /// Minimum weighted count of the niche category
    #[serde(default = "default_diversity_min_count")]
    pub diversity_min_count: u32,

    /// Matches returned when a request does not specify a count
    #[serde(default = "default_match_count")]
    pub default_match_count: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_allowed_origins() -> String {
    "http://localhost:8080,http://localhost:5173".to_string()
}

fn default_diversity_min_ratio() -> f64 {
    DiversityConfig::default().min_ratio
}

fn default_diversity_min_count() -> u32 {
    DiversityConfig::default().min_count
}

fn default_match_count() -> usize {
    DEFAULT_MATCH_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            diversity_min_ratio: default_diversity_min_ratio(),
            diversity_min_count: default_diversity_min_count(),
            default_match_count: default_match_count(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the matcher cannot work with
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.diversity_min_ratio.is_finite() || self.diversity_min_ratio < 0.0 {
            anyhow::bail!(
                "DIVERSITY_MIN_RATIO must be a non-negative number, got {}",
                self.diversity_min_ratio
            );
        }
        if self.diversity_min_count == 0 {
            anyhow::bail!("DIVERSITY_MIN_COUNT must be at least 1");
        }
        if self.default_match_count == 0 {
            anyhow::bail!("DEFAULT_MATCH_COUNT must be at least 1");
        }
        Ok(())
    }

    /// Allowed CORS origins, trimmed, empty entries dropped
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn diversity(&self) -> DiversityConfig {
        DiversityConfig {
            min_ratio: self.diversity_min_ratio,
            min_count: self.diversity_min_count,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
