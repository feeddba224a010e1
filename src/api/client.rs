use anyhow::{Context, Result};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use tokio_retry::{strategy::ExponentialBackoff, Retry};

use super::types::{BackendUser, Credentials, DiaryEntry, ErrorBody, Goal, NewDiaryEntry, NewGoal, Quest};

/// Header the backend reads the caller identity from, sent alongside the
/// bearer Authorization header.
pub const USER_ID_HEADER: &str = "user_id";

/// Non-success response from the backend.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED || self.status == StatusCode::FORBIDDEN
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backend returned {}: {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error text for a failed response: the JSON `message` field when present,
/// else the raw body, else the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ErrorBody { message: Some(msg) }) = serde_json::from_str::<ErrorBody>(body) {
        if !msg.is_empty() {
            return msg;
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status.canonical_reason().unwrap_or("request failed").to_string()
}

/// Client for the wellness backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wellquest/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Join the base URL and a path with exactly one slash.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn build(&self, method: Method, path: &str, body: Option<&serde_json::Value>) -> RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token).header(USER_ID_HEADER, token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }
        req
    }

    /// Send a request and return the raw body of a successful response.
    ///
    /// Transport failures are retried with exponential backoff; HTTP error
    /// statuses are not.
    pub async fn request_text<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .context("Failed to serialize request body")?;

        let retry_strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(5))
            .take(3);

        tracing::debug!(%method, path, "backend request");
        let response = Retry::spawn(retry_strategy, || {
            self.build(method.clone(), path, body.as_ref()).send()
        })
        .await
        .with_context(|| format!("Failed to reach backend at {}", self.url(path)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read backend response")?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "backend error response");
            return Err(ApiError {
                status,
                message: error_message(status, &text),
            }
            .into());
        }
        Ok(text)
    }

    /// Send a request and deserialize a JSON response.
    pub async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let text = self.request_text(method, path, body).await?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse backend response from {}", path))
    }

    /// Log in; the backend answers with the user id, used as the token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let creds = Credentials {
            name: "",
            email,
            password,
        };
        let token = self
            .request_text(Method::POST, "/api/login", Some(&creds))
            .await?;
        Ok(token.trim().trim_matches('"').to_string())
    }

    /// Create an account and return its token.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<String> {
        let creds = Credentials {
            name,
            email,
            password,
        };
        let token = self
            .request_text(Method::POST, "/api/register", Some(&creds))
            .await?;
        Ok(token.trim().trim_matches('"').to_string())
    }

    pub async fn me(&self) -> Result<BackendUser> {
        let user: Option<BackendUser> = self.request(Method::GET, "/api/me", None::<&()>).await?;
        user.context("Backend returned no user for this token")
    }

    /// Store the questionnaire total as the user's form points.
    pub async fn send_form_points(&self, total: i64) -> Result<()> {
        self.request_text(Method::POST, "/api/send_form_points", Some(&total))
            .await?;
        Ok(())
    }

    pub async fn weekly_quest(&self) -> Result<Quest> {
        self.request(Method::GET, "/api/get_weekly", None::<&()>).await
    }

    /// The best quest the user's points unlock and that they have not taken
    /// yet. `None` when nothing qualifies.
    pub async fn matched_quest(&self) -> Result<Option<Quest>> {
        let quest: Quest = self
            .request(Method::GET, "/challange/receive", None::<&()>)
            .await?;
        Ok((!quest.is_placeholder()).then_some(quest))
    }

    pub async fn complete_challenge(&self, id: &str) -> Result<()> {
        let path = format!("/api/complete_challenge/{}", id);
        self.request_text(Method::POST, &path, None::<&()>).await?;
        Ok(())
    }

    pub async fn goals(&self) -> Result<Vec<Goal>> {
        self.request(Method::GET, "/api/goals", None::<&()>).await
    }

    /// Create a goal. Returns the stored goal when the backend echoes one.
    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Option<Goal>> {
        let text = self
            .request_text(Method::POST, "/api/goals", Some(goal))
            .await?;
        Ok(parse_echo(&text))
    }

    pub async fn delete_goal(&self, id: &str) -> Result<()> {
        let path = format!("/api/goals/{}", id);
        self.request_text(Method::DELETE, &path, None::<&()>).await?;
        Ok(())
    }

    /// Diary entries, newest first.
    pub async fn diary(&self) -> Result<Vec<DiaryEntry>> {
        let mut entries: Vec<DiaryEntry> =
            self.request(Method::GET, "/api/diary", None::<&()>).await?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    /// Write a diary entry. Returns the stored entry when the backend echoes one.
    pub async fn create_diary_entry(&self, entry: &NewDiaryEntry) -> Result<Option<DiaryEntry>> {
        let text = self
            .request_text(Method::POST, "/api/diary", Some(entry))
            .await?;
        Ok(parse_echo(&text))
    }

    pub async fn delete_diary_entry(&self, id: &str) -> Result<()> {
        let path = format!("/api/diary/{}", id);
        self.request_text(Method::DELETE, &path, None::<&()>).await?;
        Ok(())
    }
}

/// Parse the record a create call may echo back; an empty or unrecognized
/// body just means there is nothing to show.
fn parse_echo<T: DeserializeOwned>(text: &str) -> Option<T> {
    if text.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring unrecognized create response");
            None
        }
    }
}
