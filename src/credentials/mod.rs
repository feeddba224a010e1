pub mod prompt;

use std::fmt;
use std::path::Path;

use crate::session::load_session;

/// Environment variable name for providing a backend token without logging in
pub const ENV_TOKEN_VAR: &str = "WELLQUEST_TOKEN";

pub use prompt::{prompt_for_email, prompt_for_password};

fn non_empty(val: &str) -> Option<String> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check for a token in the WELLQUEST_TOKEN environment variable.
/// Returns Some(token) if the env var is set and non-empty, None otherwise.
pub fn get_token_from_env() -> Option<String> {
    std::env::var(ENV_TOKEN_VAR).ok().as_deref().and_then(non_empty)
}

#[derive(Debug)]
pub enum CredentialError {
    TokenNotFound,
    SessionUnreadable(String),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::TokenNotFound => write!(
                f,
                "Not logged in. Run `wellquest login` or set {}",
                ENV_TOKEN_VAR
            ),
            CredentialError::SessionUnreadable(msg) => write!(f, "Failed to read session: {}", msg),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Resolve a bearer token from, in order: the env var value, the config
/// file token, the saved session.
pub fn resolve_token_from(
    env_token: Option<String>,
    config_token: Option<&str>,
    session_path: &Path,
) -> Result<String, CredentialError> {
    if let Some(token) = env_token {
        tracing::debug!("using token from {}", ENV_TOKEN_VAR);
        return Ok(token);
    }
    if let Some(token) = config_token.and_then(non_empty) {
        tracing::debug!("using token from config file");
        return Ok(token);
    }

    match load_session(session_path) {
        Ok(Some(session)) => {
            tracing::debug!(saved = %session.format_age(), "using saved session");
            Ok(session.token)
        }
        Ok(None) => Err(CredentialError::TokenNotFound),
        Err(e) => Err(CredentialError::SessionUnreadable(format!("{:#}", e))),
    }
}

/// Resolve a bearer token using the real environment.
pub fn resolve_token(config_token: Option<&str>, session_path: &Path) -> Result<String, CredentialError> {
    resolve_token_from(get_token_from_env(), config_token, session_path)
}
