mod schema;

pub use schema::{ApiConfig, Config, DEFAULT_BASE_URL};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/wellquest/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("wellquest"))
}

/// Get the default config file path (~/.config/wellquest/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Parse configuration from YAML text
pub fn parse_config(content: &str) -> Result<Config> {
    serde_saphyr::from_str(content).context("Failed to parse config: invalid YAML")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;
    parse_config(&content).with_context(|| format!("In {}", path.display()))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/wellquest/config.yaml) and falls back to defaults when that
///   file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => {
            let path = get_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            read_config(&path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.token.is_none());
        assert!(config.scoring.is_none());
        assert_eq!(config.effective_scoring(), crate::scoring::ScoringConfig::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
api:
  base_url: "https://wellquest.example.com"
  token: "abc"
scoring:
  energy:
    "Висока": 1
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.api.base_url, "https://wellquest.example.com");
        assert_eq!(config.api.token.as_deref(), Some("abc"));

        let scoring = config.effective_scoring();
        assert_eq!(scoring.energy.unwrap()["Висока"], 1);
        assert!(scoring.mood.is_some());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_config("queries: []").is_err());
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        let path = std::env::temp_dir().join("wellquest_test_no_such_config.yaml");
        let _ = fs::remove_file(&path);
        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join("wellquest_test_config.yaml");
        fs::write(&path, "api:\n  base_url: \"http://127.0.0.1:9000\"\n").unwrap();

        let config = load_config(Some(path.clone())).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");

        let _ = fs::remove_file(&path);
    }
}
