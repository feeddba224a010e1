use serde::Serialize;
use std::fmt;

use super::config::{CategoryBoost, PointTable, ScoringConfig};
use crate::questionnaire::{Answers, Field};

/// Wellness dimension an answer contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mental,
    Digital,
    Nature,
    Selfcare,
    Routine,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Mental,
        Category::Digital,
        Category::Nature,
        Category::Selfcare,
        Category::Routine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Mental => "mental",
            Category::Digital => "digital",
            Category::Nature => "nature",
            Category::Selfcare => "selfcare",
            Category::Routine => "routine",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulated points per category. Sums saturate at the `i64` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub mental: i64,
    pub digital: i64,
    pub nature: i64,
    pub selfcare: i64,
    pub routine: i64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> i64 {
        match category {
            Category::Mental => self.mental,
            Category::Digital => self.digital,
            Category::Nature => self.nature,
            Category::Selfcare => self.selfcare,
            Category::Routine => self.routine,
        }
    }

    fn add(&mut self, category: Category, points: i64) {
        let slot = match category {
            Category::Mental => &mut self.mental,
            Category::Digital => &mut self.digital,
            Category::Nature => &mut self.nature,
            Category::Selfcare => &mut self.selfcare,
            Category::Routine => &mut self.routine,
        };
        *slot = slot.saturating_add(points);
    }

    pub fn total(&self) -> i64 {
        Category::ALL
            .iter()
            .fold(0i64, |acc, c| acc.saturating_add(self.get(*c)))
    }
}

/// One matched table entry, kept for explanation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub field: Field,
    pub value: String,
    pub category: Category,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub categories: CategoryScores,
    pub total: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<Contribution>,
}

/// Table lookup that treats every miss as zero.
fn lookup(table: &Option<PointTable>, value: &str) -> Option<i64> {
    table.as_ref().and_then(|t| t.get(value)).copied()
}

struct Accumulator {
    categories: CategoryScores,
    breakdown: Vec<Contribution>,
}

impl Accumulator {
    fn apply(&mut self, field: Field, value: &str, category: Category, points: Option<i64>) {
        if let Some(points) = points {
            self.categories.add(category, points);
            self.breakdown.push(Contribution {
                field,
                value: value.to_string(),
                category,
                points,
            });
        }
    }

    fn apply_boost(&mut self, value: &str, boost: &CategoryBoost) {
        let parts = [
            (Category::Mental, boost.mental),
            (Category::Nature, boost.nature),
            (Category::Routine, boost.routine),
            (Category::Selfcare, boost.selfcare),
            (Category::Digital, boost.digital),
        ];
        for (category, points) in parts {
            // a zero boost is no boost
            self.apply(Field::Priority, value, category, points.filter(|p| *p != 0));
        }
    }
}

/// Score a questionnaire submission against the rule tables.
///
/// Never fails: an empty answer, an unknown option, or a missing table all
/// contribute zero.
pub fn calculate_scores(answers: &Answers, config: &ScoringConfig) -> ScoreResult {
    let mut acc = Accumulator {
        categories: CategoryScores::default(),
        breakdown: Vec::new(),
    };

    // Mental
    acc.apply(Field::Mood, &answers.mood, Category::Mental, lookup(&config.mood, &answers.mood));
    acc.apply(
        Field::HeadState,
        &answers.head_state,
        Category::Mental,
        lookup(&config.head_state, &answers.head_state),
    );
    acc.apply(Field::Energy, &answers.energy, Category::Mental, lookup(&config.energy, &answers.energy));

    // Digital
    acc.apply(
        Field::ScreenTime,
        &answers.screen_time,
        Category::Digital,
        lookup(&config.screen_time, &answers.screen_time),
    );
    for tag in &answers.phone_feeling {
        acc.apply(Field::PhoneFeeling, tag, Category::Digital, lookup(&config.phone_feeling, tag));
    }
    acc.apply(
        Field::PhoneImpulse,
        &answers.phone_impulse,
        Category::Digital,
        lookup(&config.phone_impulse, &answers.phone_impulse),
    );

    // Nature
    acc.apply(
        Field::LastNature,
        &answers.last_nature,
        Category::Nature,
        lookup(&config.last_nature, &answers.last_nature),
    );
    acc.apply(
        Field::NatureConnection,
        &answers.nature_connection,
        Category::Nature,
        lookup(&config.nature_connection, &answers.nature_connection),
    );

    // Self-care
    acc.apply(
        Field::Readiness,
        &answers.readiness,
        Category::Selfcare,
        lookup(&config.readiness, &answers.readiness),
    );

    if let Some(boost) = config
        .priority_boost
        .as_ref()
        .and_then(|b| b.get(&answers.priority))
    {
        acc.apply_boost(&answers.priority, boost);
    }

    let total = acc.categories.total();
    tracing::debug!(total, contributions = acc.breakdown.len(), "scored answers");

    ScoreResult {
        categories: acc.categories,
        total,
        breakdown: acc.breakdown,
    }
}

/// Score using the built-in tables.
pub fn calculate_default_scores(answers: &Answers) -> ScoreResult {
    calculate_scores(answers, &ScoringConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sample_answers() -> Answers {
        Answers {
            mood: "Тревожен".to_string(),
            head_state: "Много хаотично".to_string(),
            energy: "Ниска".to_string(),
            screen_time: "5–7 часа".to_string(),
            phone_feeling: ["Бягство от стрес", "Отегчение"]
                .into_iter()
                .map(String::from)
                .collect(),
            phone_impulse: "Да, скука".to_string(),
            last_nature: "Повече от седмица".to_string(),
            nature_connection: "Слаба".to_string(),
            readiness: "Умерено мотивиран".to_string(),
            difficulty_preference: "Среден".to_string(),
            priority: "Работа върху фокус и продуктивност".to_string(),
        }
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let result = calculate_default_scores(&Answers::default());
        assert_eq!(result.categories, CategoryScores::default());
        assert_eq!(result.total, 0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_full_scoring_flow() {
        let result = calculate_default_scores(&sample_answers());

        // mood 3 + head 2 + energy 2
        assert_eq!(result.categories.mental, 7);
        // screen 3 + feelings (2 + 1) + impulse 1 + priority boost 1
        assert_eq!(result.categories.digital, 8);
        // last nature 3 + connection 2
        assert_eq!(result.categories.nature, 5);
        assert_eq!(result.categories.selfcare, 1);
        assert_eq!(result.categories.routine, 2);
        assert_eq!(result.total, 23);
    }

    #[test]
    fn test_unknown_values_score_zero() {
        let answers = Answers {
            mood: "??".to_string(),
            head_state: "??".to_string(),
            energy: "??".to_string(),
            screen_time: "??".to_string(),
            phone_feeling: BTreeSet::from(["??".to_string()]),
            phone_impulse: "??".to_string(),
            last_nature: "??".to_string(),
            nature_connection: "??".to_string(),
            readiness: "??".to_string(),
            difficulty_preference: "??".to_string(),
            priority: "??".to_string(),
        };
        let result = calculate_default_scores(&answers);
        assert_eq!(result.categories, CategoryScores::default());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_missing_tables_score_zero() {
        let result = calculate_scores(&sample_answers(), &ScoringConfig::empty());
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_priority_boost_absent_keys_ignored() {
        let answers = Answers {
            priority: "Контакт с природата".to_string(),
            ..Answers::default()
        };
        let result = calculate_default_scores(&answers);
        assert_eq!(result.categories.nature, 3);
        assert_eq!(result.categories.mental, 0);
        assert_eq!(result.total, 3);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].category, Category::Nature);
    }

    #[test]
    fn test_zero_boost_adds_no_breakdown_line() {
        let mut config = ScoringConfig::empty();
        config.priority_boost = Some(
            [(
                "Малки навици за спокойствие".to_string(),
                CategoryBoost {
                    mental: Some(0),
                    selfcare: Some(2),
                    ..CategoryBoost::default()
                },
            )]
            .into_iter()
            .collect(),
        );
        let answers = Answers {
            priority: "Малки навици за спокойствие".to_string(),
            ..Answers::default()
        };

        let result = calculate_scores(&answers, &config);
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].category, Category::Selfcare);
        assert_eq!(result.total, 2);
    }

    #[test]
    fn test_huge_table_values_saturate() {
        let mut config = ScoringConfig::empty();
        config.mood = Some(PointTable::from([("Тревожен".to_string(), i64::MAX)]));
        config.head_state = Some(PointTable::from([("Много хаотично".to_string(), i64::MAX)]));
        config.screen_time = Some(PointTable::from([("5–7 часа".to_string(), i64::MAX)]));
        let answers = Answers {
            mood: "Тревожен".to_string(),
            head_state: "Много хаотично".to_string(),
            screen_time: "5–7 часа".to_string(),
            ..Answers::default()
        };

        let result = calculate_scores(&answers, &config);
        assert_eq!(result.categories.mental, i64::MAX);
        assert_eq!(result.categories.digital, i64::MAX);
        assert_eq!(result.total, i64::MAX);

        config.mood = Some(PointTable::from([("Тревожен".to_string(), i64::MIN)]));
        config.head_state = Some(PointTable::from([("Много хаотично".to_string(), -1)]));
        let result = calculate_scores(&answers, &config);
        assert_eq!(result.categories.mental, i64::MIN);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        let result = calculate_default_scores(&sample_answers());
        let sum: i64 = Category::ALL.iter().map(|c| result.categories.get(*c)).sum();
        assert_eq!(result.total, sum);
    }

    #[test]
    fn test_breakdown_points_sum_to_total() {
        let result = calculate_default_scores(&sample_answers());
        let sum: i64 = result.breakdown.iter().map(|c| c.points).sum();
        assert_eq!(sum, result.total);
    }

    #[test]
    fn test_deterministic() {
        let config = ScoringConfig::default();
        let a = calculate_scores(&sample_answers(), &config);
        let b = calculate_scores(&sample_answers(), &config);
        assert_eq!(a, b);
        assert_eq!(config, ScoringConfig::default());
    }
}
