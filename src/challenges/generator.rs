use serde::Serialize;
use std::collections::HashSet;

use super::catalog::{by_difficulty, Challenge, Difficulty};
use crate::questionnaire::Answers;

/// Most challenges recommended per day.
pub const MAX_DAILY_CHALLENGES: usize = 3;

const SCREEN_TIME_HEAVY: &[&str] = &["5–7 часа", "Над 7 часа", "Над 7"];

/// Which catalog entries a rule contributes.
#[derive(Debug, Clone, Copy)]
enum Pick {
    /// The first `n` of a tier, in catalog order.
    First(Difficulty, usize),
    /// The entry at a fixed position within a tier.
    Nth(Difficulty, usize),
}

impl Pick {
    fn resolve(self) -> Vec<Challenge> {
        match self {
            Pick::First(level, n) => by_difficulty(level).take(n).copied().collect(),
            Pick::Nth(level, idx) => by_difficulty(level).nth(idx).copied().into_iter().collect(),
        }
    }
}

struct Rule {
    name: &'static str,
    applies: fn(&Answers) -> bool,
    pick: Pick,
}

/// Evaluated in order; every rule runs regardless of earlier matches.
static RULES: &[Rule] = &[
    Rule {
        name: "exhausted",
        applies: |a| {
            a.energy == "Ниска" || a.energy == "Много ниска" || a.mood == "Емоционално изтощен"
        },
        pick: Pick::First(Difficulty::Easy, 2),
    },
    Rule {
        name: "energized",
        applies: |a| a.energy == "Висока" && a.readiness == "Напълно мотивиран",
        pick: Pick::First(Difficulty::Hard, 2),
    },
    Rule {
        name: "heavy-screen-time",
        applies: |a| SCREEN_TIME_HEAVY.contains(&a.screen_time.as_str()),
        // digital detox
        pick: Pick::Nth(Difficulty::Medium, 1),
    },
    Rule {
        name: "no-nature",
        applies: |a| a.last_nature == "Повече от седмица",
        // mindful walk
        pick: Pick::Nth(Difficulty::Medium, 2),
    },
    Rule {
        name: "prefers-easy",
        applies: |a| a.difficulty_preference == "Лесен",
        pick: Pick::First(Difficulty::Easy, 1),
    },
    Rule {
        name: "prefers-medium",
        applies: |a| a.difficulty_preference == "Среден",
        pick: Pick::First(Difficulty::Medium, 1),
    },
    Rule {
        name: "prefers-challenging",
        applies: |a| a.difficulty_preference == "Предизвикателен",
        pick: Pick::First(Difficulty::Hard, 1),
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedChallengeSet {
    pub challenges: Vec<Challenge>,
}

impl GeneratedChallengeSet {
    pub fn ids(&self) -> Vec<u32> {
        self.challenges.iter().map(|c| c.id).collect()
    }
}

/// Candidate challenges from all matching rules, before dedup and truncation.
pub fn candidate_challenges(answers: &Answers) -> Vec<Challenge> {
    let mut picked = Vec::new();
    for rule in RULES {
        if (rule.applies)(answers) {
            let added = rule.pick.resolve();
            tracing::debug!(rule = rule.name, added = added.len(), "challenge rule matched");
            picked.extend(added);
        }
    }
    picked
}

/// Pick up to three daily challenges for a questionnaire submission.
///
/// Duplicates are dropped keeping the first occurrence, so rule order decides
/// which challenges survive the cut.
pub fn generate_daily_challenges(answers: &Answers) -> GeneratedChallengeSet {
    let mut seen = HashSet::new();
    let challenges: Vec<Challenge> = candidate_challenges(answers)
        .into_iter()
        .filter(|c| seen.insert(c.id))
        .take(MAX_DAILY_CHALLENGES)
        .collect();

    GeneratedChallengeSet { challenges }
}
