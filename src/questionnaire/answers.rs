use anyhow::{Context, Result};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use super::questions::Field;

/// One questionnaire submission.
///
/// Every field is optional in practice: an empty string means the question was
/// skipped. Keys use the camelCase names of the form payload. Values of the
/// wrong shape (null, numbers, nested maps) read as unanswered instead of
/// failing the whole submission.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Answers {
    #[serde(deserialize_with = "lenient_choice")]
    pub mood: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub head_state: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub energy: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub screen_time: String,
    /// Multi-choice; a set so that order and repeats never matter.
    #[serde(deserialize_with = "lenient_tags")]
    pub phone_feeling: BTreeSet<String>,
    #[serde(deserialize_with = "lenient_choice")]
    pub phone_impulse: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub last_nature: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub nature_connection: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub readiness: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub difficulty_preference: String,
    #[serde(deserialize_with = "lenient_choice")]
    pub priority: String,
}

/// Any answer value, as far as the scorer cares.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    List(Vec<RawValue>),
    Other(IgnoredAny),
}

fn lenient_choice<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(text) => text,
        RawValue::List(_) | RawValue::Other(_) => String::new(),
    })
}

/// A single string counts as a one-tag list; non-string list items are dropped.
fn lenient_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeSet<String>, D::Error> {
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(text) => BTreeSet::from([text]),
        RawValue::List(items) => items
            .into_iter()
            .filter_map(|item| match item {
                RawValue::Text(text) => Some(text),
                _ => None,
            })
            .collect(),
        RawValue::Other(_) => BTreeSet::new(),
    })
}

impl Answers {
    /// Set a single-choice field, or add a tag for `PhoneFeeling`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::PhoneFeeling => {
                self.phone_feeling.insert(value);
            }
            _ => {
                if let Some(slot) = self.single_mut(field) {
                    *slot = value;
                }
            }
        }
    }

    /// Value of a single-choice field. `PhoneFeeling` returns `None`; use
    /// `phone_feeling` directly.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Mood => &self.mood,
            Field::HeadState => &self.head_state,
            Field::Energy => &self.energy,
            Field::ScreenTime => &self.screen_time,
            Field::PhoneFeeling => return None,
            Field::PhoneImpulse => &self.phone_impulse,
            Field::LastNature => &self.last_nature,
            Field::NatureConnection => &self.nature_connection,
            Field::Readiness => &self.readiness,
            Field::DifficultyPreference => &self.difficulty_preference,
            Field::Priority => &self.priority,
        };
        Some(value.as_str())
    }

    fn single_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Mood => Some(&mut self.mood),
            Field::HeadState => Some(&mut self.head_state),
            Field::Energy => Some(&mut self.energy),
            Field::ScreenTime => Some(&mut self.screen_time),
            Field::PhoneFeeling => None,
            Field::PhoneImpulse => Some(&mut self.phone_impulse),
            Field::LastNature => Some(&mut self.last_nature),
            Field::NatureConnection => Some(&mut self.nature_connection),
            Field::Readiness => Some(&mut self.readiness),
            Field::DifficultyPreference => Some(&mut self.difficulty_preference),
            Field::Priority => Some(&mut self.priority),
        }
    }

    /// True when no question was answered.
    pub fn is_empty(&self) -> bool {
        self.phone_feeling.is_empty()
            && Field::ALL
                .iter()
                .filter_map(|f| self.get(*f))
                .all(|v| v.trim().is_empty())
    }
}

/// Syntax of an answers file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswersFormat {
    Json,
    /// Also accepts JSON documents, since YAML is a superset.
    Yaml,
}

impl AnswersFormat {
    /// `.json` files are JSON; everything else, stdin included, is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => AnswersFormat::Json,
            _ => AnswersFormat::Yaml,
        }
    }
}

/// Parse answers from text in the given format.
pub fn parse_answers(content: &str, format: AnswersFormat) -> Result<Answers> {
    match format {
        AnswersFormat::Json => {
            serde_json::from_str(content).context("Failed to parse answers: invalid JSON")
        }
        AnswersFormat::Yaml => {
            serde_saphyr::from_str(content).context("Failed to parse answers: invalid YAML")
        }
    }
}

/// Load answers from a YAML or JSON file. A path of `-` reads stdin.
pub fn load_answers(path: &Path) -> Result<Answers> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file at {}", path.display()))?
    };

    parse_answers(&content, AnswersFormat::from_path(path))
        .with_context(|| format!("In {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let answers = Answers::default();
        assert!(answers.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut answers = Answers::default();
        answers.set(Field::Energy, "Висока");
        answers.set(Field::PhoneFeeling, "Отегчение");
        answers.set(Field::PhoneFeeling, "Отегчение");

        assert_eq!(answers.get(Field::Energy), Some("Висока"));
        assert_eq!(answers.get(Field::PhoneFeeling), None);
        assert_eq!(answers.phone_feeling.len(), 1);
        assert!(!answers.is_empty());
    }

    #[test]
    fn test_parse_json_camel_case() {
        let json = r#"{
            "mood": "Тревожен",
            "headState": "Много хаотично",
            "phoneFeeling": ["Удоволствие", "Отегчение"],
            "difficultyPreference": "Среден"
        }"#;
        let answers = parse_answers(json, AnswersFormat::Json).unwrap();
        assert_eq!(answers.mood, "Тревожен");
        assert_eq!(answers.head_state, "Много хаотично");
        assert_eq!(answers.phone_feeling.len(), 2);
        assert_eq!(answers.difficulty_preference, "Среден");
        assert!(answers.energy.is_empty());
    }

    #[test]
    fn test_parse_yaml_partial() {
        let yaml = r#"
energy: "Много ниска"
lastNature: "Повече от седмица"
"#;
        let answers = parse_answers(yaml, AnswersFormat::Yaml).unwrap();
        assert_eq!(answers.energy, "Много ниска");
        assert_eq!(answers.last_nature, "Повече от седмица");
        assert!(answers.phone_feeling.is_empty());
    }

    #[test]
    fn test_null_and_non_string_values_read_as_unanswered() {
        let json = r#"{"phoneFeeling": null, "mood": null, "readiness": 3, "energy": "Много ниска"}"#;
        let answers = parse_answers(json, AnswersFormat::Json).unwrap();
        assert!(answers.phone_feeling.is_empty());
        assert_eq!(answers.mood, "");
        assert_eq!(answers.readiness, "");
        assert_eq!(answers.energy, "Много ниска");
    }

    #[test]
    fn test_single_phone_feeling_string_becomes_one_tag() {
        let json = r#"{"phoneFeeling": "Отегчение"}"#;
        let answers = parse_answers(json, AnswersFormat::Json).unwrap();
        assert_eq!(
            answers.phone_feeling,
            BTreeSet::from(["Отегчение".to_string()])
        );
    }

    #[test]
    fn test_phone_feeling_drops_non_string_items() {
        let json = r#"{"phoneFeeling": ["Удоволствие", 5, null, {"x": 1}], "priority": {"a": 1}}"#;
        let answers = parse_answers(json, AnswersFormat::Json).unwrap();
        assert_eq!(
            answers.phone_feeling,
            BTreeSet::from(["Удоволствие".to_string()])
        );
        assert_eq!(answers.priority, "");
    }

    #[test]
    fn test_lenient_yaml_values() {
        let yaml = "mood: ~\nphoneFeeling: Отегчение\nheadState: [a, b]\nenergy: Висока\n";
        let answers = parse_answers(yaml, AnswersFormat::Yaml).unwrap();
        assert_eq!(answers.mood, "");
        assert_eq!(answers.head_state, "");
        assert_eq!(answers.energy, "Висока");
        assert_eq!(answers.phone_feeling.len(), 1);
    }

    #[test]
    fn test_yaml_reader_accepts_json_documents() {
        let answers = parse_answers(r#"{"energy": "Средна"}"#, AnswersFormat::Yaml).unwrap();
        assert_eq!(answers.energy, "Средна");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(AnswersFormat::from_path(Path::new("a.json")), AnswersFormat::Json);
        assert_eq!(AnswersFormat::from_path(Path::new("a.JSON")), AnswersFormat::Json);
        assert_eq!(AnswersFormat::from_path(Path::new("a.yaml")), AnswersFormat::Yaml);
        assert_eq!(AnswersFormat::from_path(Path::new("answers")), AnswersFormat::Yaml);
        assert_eq!(AnswersFormat::from_path(Path::new("-")), AnswersFormat::Yaml);
    }

    #[test]
    fn test_load_picks_parser_by_extension() {
        let dir = std::env::temp_dir();
        let yaml_path = dir.join("wellquest_test_answers_ext.yaml");
        let json_path = dir.join("wellquest_test_answers_ext.json");
        std::fs::write(&yaml_path, "energy: Средна\n").unwrap();
        std::fs::write(&json_path, "energy: Средна\n").unwrap();

        assert_eq!(load_answers(&yaml_path).unwrap().energy, "Средна");
        let err = load_answers(&json_path).unwrap_err();
        assert!(format!("{:#}", err).contains("invalid JSON"));

        let _ = std::fs::remove_file(&yaml_path);
        let _ = std::fs::remove_file(&json_path);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = std::env::temp_dir().join("wellquest_test_missing_answers.yaml");
        let _ = std::fs::remove_file(&path);
        assert!(load_answers(&path).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("wellquest_test_answers.json");
        std::fs::write(&path, r#"{"energy": "Средна"}"#).unwrap();

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.energy, "Средна");

        let _ = std::fs::remove_file(&path);
    }
}
