use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SESSION_VERSION: u32 = 1;

/// A logged-in session, restored on the next run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub version: u32,
    pub token: String,
    #[serde(default)]
    pub email: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, email: Option<String>) -> Self {
        Self {
            version: SESSION_VERSION,
            token,
            email,
            saved_at: Utc::now(),
        }
    }

    /// Human-friendly age of the session ("3d ago", "just now").
    pub fn format_age(&self) -> String {
        let age = Utc::now() - self.saved_at;
        let days = age.num_days();
        let hours = age.num_hours();
        let minutes = age.num_minutes();

        if days >= 1 {
            format!("{}d ago", days)
        } else if hours >= 1 {
            format!("{}h ago", hours)
        } else if minutes >= 1 {
            format!("{}m ago", minutes)
        } else {
            "just now".to_string()
        }
    }
}
