use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points per answer option.
pub type PointTable = BTreeMap<String, i64>;

/// Scoring rule tables.
///
/// One table per scored questionnaire field, plus the priority boost table.
/// A table that is absent contributes nothing; use [`ScoringConfig::with_defaults`]
/// to fill gaps from the built-in tables.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   energy:
///     "Висока": 0
///     "Много ниска": 3
///   priority_boost:
///     "Контакт с природата": { nature: 3 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub mood: Option<PointTable>,
    #[serde(default)]
    pub head_state: Option<PointTable>,
    #[serde(default)]
    pub energy: Option<PointTable>,
    #[serde(default)]
    pub screen_time: Option<PointTable>,
    #[serde(default)]
    pub phone_feeling: Option<PointTable>,
    #[serde(default)]
    pub phone_impulse: Option<PointTable>,
    #[serde(default)]
    pub last_nature: Option<PointTable>,
    #[serde(default)]
    pub nature_connection: Option<PointTable>,
    #[serde(default)]
    pub readiness: Option<PointTable>,

    /// Bonus points per category for the chosen priority
    #[serde(default)]
    pub priority_boost: Option<BTreeMap<String, CategoryBoost>>,
}

/// Bonus applied to categories when a priority is chosen.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CategoryBoost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mental: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfcare: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine: Option<i64>,
}

fn table(entries: &[(&str, i64)]) -> Option<PointTable> {
    Some(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect(),
    )
}

fn boost(mental: i64, digital: i64, nature: i64, selfcare: i64, routine: i64) -> CategoryBoost {
    let some = |v: i64| if v == 0 { None } else { Some(v) };
    CategoryBoost {
        mental: some(mental),
        digital: some(digital),
        nature: some(nature),
        selfcare: some(selfcare),
        routine: some(routine),
    }
}

impl Default for ScoringConfig {
    /// Built-in tables. Higher points mean more need in that category.
    fn default() -> Self {
        Self {
            mood: table(&[
                ("Спокоен и уравновесен", 0),
                ("Леко напрегнат", 1),
                ("Раздразнен/претоварен", 2),
                ("Тревожен", 3),
                ("Емоционално изтощен", 4),
            ]),
            head_state: table(&[
                ("Ясно и фокусирано", 0),
                ("Малко хаотично", 1),
                ("Много хаотично", 2),
                ("Усещам „ментален шум“", 3),
            ]),
            energy: table(&[
                ("Висока", 0),
                ("Средна", 1),
                ("Ниска", 2),
                ("Много ниска", 3),
            ]),
            screen_time: table(&[
                ("Под 1 час", 0),
                ("1–3 часа", 1),
                ("3–5 часа", 2),
                ("5–7 часа", 3),
                ("Над 7 часа", 4),
                ("Над 7", 4),
            ]),
            phone_feeling: table(&[
                ("Удоволствие", 0),
                ("Бягство от стрес", 2),
                ("Автоматичен навик", 2),
                ("Отегчение", 1),
                ("Негативни емоции", 3),
            ]),
            phone_impulse: table(&[
                ("Да, стрес", 2),
                ("Да, скука", 1),
                ("Да, липса на мотивация", 2),
                ("Да, тревожност", 2),
                ("Не, днес се чувствам стабилен", 0),
            ]),
            last_nature: table(&[
                ("Днес", 0),
                ("Вчера", 1),
                ("Няколко дни", 2),
                ("Повече от седмица", 3),
            ]),
            nature_connection: table(&[
                ("Силна — чувствам се свързан", 0),
                ("Средна", 1),
                ("Слаба", 2),
                ("Почти никаква", 3),
            ]),
            readiness: table(&[
                ("Напълно мотивиран", 0),
                ("Умерено мотивиран", 1),
                ("Почти нямам сили", 2),
                ("Искам да опитам, но съм изтощен", 3),
            ]),
            priority_boost: Some(
                [
                    ("Намаляване на телефона", boost(0, 3, 0, 0, 0)),
                    ("Подобряване на емоционалното състояние", boost(3, 0, 0, 0, 0)),
                    ("Работа върху фокус и продуктивност", boost(0, 1, 0, 0, 2)),
                    ("Контакт с природата", boost(0, 0, 3, 0, 0)),
                    ("Малки навици за спокойствие", boost(0, 0, 0, 2, 1)),
                ]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            ),
        }
    }
}

impl ScoringConfig {
    /// A config with every table absent. Scores everything as zero.
    pub fn empty() -> Self {
        Self {
            mood: None,
            head_state: None,
            energy: None,
            screen_time: None,
            phone_feeling: None,
            phone_impulse: None,
            last_nature: None,
            nature_connection: None,
            readiness: None,
            priority_boost: None,
        }
    }

    /// Fill absent tables from the built-in defaults. Tables that are present
    /// replace the default table wholesale.
    pub fn with_defaults(self) -> Self {
        let d = Self::default();
        Self {
            mood: self.mood.or(d.mood),
            head_state: self.head_state.or(d.head_state),
            energy: self.energy.or(d.energy),
            screen_time: self.screen_time.or(d.screen_time),
            phone_feeling: self.phone_feeling.or(d.phone_feeling),
            phone_impulse: self.phone_impulse.or(d.phone_impulse),
            last_nature: self.last_nature.or(d.last_nature),
            nature_connection: self.nature_connection.or(d.nature_connection),
            readiness: self.readiness.or(d.readiness),
            priority_boost: self.priority_boost.or(d.priority_boost),
        }
    }
}
