use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:7564";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    /// Partial tables override the built-in ones
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// Scoring tables with built-in defaults filled in.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring
            .clone()
            .map(ScoringConfig::with_defaults)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}
