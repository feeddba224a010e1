use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User record as returned by `GET /api/me`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct BackendUser {
    pub id: String,
    pub name: String,
    pub mail: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub longest_streak: i64,
    #[serde(default)]
    pub current_streak: i64,
    #[serde(default)]
    pub last_active: Option<NaiveDate>,
}

/// Backend quest (weekly or assigned challenge).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Quest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_points: i64,
    #[serde(default)]
    pub points_received: i64,
}

impl Quest {
    /// The backend answers with a nil-id, unnamed quest when nothing matches.
    pub fn is_placeholder(&self) -> bool {
        self.name.trim().is_empty() || self.id.chars().all(|c| c == '0' || c == '-')
    }
}

/// Personal goal from `/api/goals`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Goal {
    pub id: String,
    #[serde(default, alias = "title", alias = "quest")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

pub const DEFAULT_GOAL_CATEGORY: &str = "Personal";

/// Body for creating a goal.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub description: String,
    pub category: String,
    pub priority: i64,
}

impl NewGoal {
    /// Trimmed goal; a blank title is rejected, a blank category becomes the default.
    pub fn new(name: &str, description: &str, category: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            bail!("Goal title must not be empty");
        }
        let category = match category.trim() {
            "" => DEFAULT_GOAL_CATEGORY,
            other => other,
        };
        Ok(Self {
            name: name.to_string(),
            description: description.trim().to_string(),
            category: category.to_string(),
            priority: 0,
        })
    }
}

/// Mood tag of a diary entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiaryMood {
    Amazing,
    #[default]
    Happy,
    Neutral,
    Sad,
    Stressed,
}

impl DiaryMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiaryMood::Amazing => "amazing",
            DiaryMood::Happy => "happy",
            DiaryMood::Neutral => "neutral",
            DiaryMood::Sad => "sad",
            DiaryMood::Stressed => "stressed",
        }
    }
}

impl fmt::Display for DiaryMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiaryMood {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "amazing" => Ok(DiaryMood::Amazing),
            "happy" => Ok(DiaryMood::Happy),
            "neutral" => Ok(DiaryMood::Neutral),
            "sad" => Ok(DiaryMood::Sad),
            "stressed" => Ok(DiaryMood::Stressed),
            other => bail!(
                "Unknown mood '{}'. Expected one of: amazing, happy, neutral, sad, stressed",
                other
            ),
        }
    }
}

/// Diary entry from `/api/diary`. The mood stays a plain string so entries
/// written by other clients still load.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DiaryEntry {
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub content: String,
}

/// Body for writing a diary entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewDiaryEntry {
    pub date: NaiveDate,
    pub mood: DiaryMood,
    pub content: String,
}

impl NewDiaryEntry {
    pub fn new(date: NaiveDate, mood: DiaryMood, content: &str) -> Result<Self> {
        let content = content.trim();
        if content.is_empty() {
            bail!("Diary entry must not be empty");
        }
        Ok(Self {
            date,
            mood,
            content: content.to_string(),
        })
    }
}

/// Body for `/api/login` and `/api/register`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
