use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Category tag of a pool challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolCategory {
    Mental,
    Nature,
    Digital,
    Selfcare,
    Routine,
    Social,
}

impl fmt::Display for PoolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PoolCategory::Mental => "mental",
            PoolCategory::Nature => "nature",
            PoolCategory::Digital => "digital",
            PoolCategory::Selfcare => "selfcare",
            PoolCategory::Routine => "routine",
            PoolCategory::Social => "social",
        };
        f.write_str(s)
    }
}

impl FromStr for PoolCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mental" => Ok(PoolCategory::Mental),
            "nature" => Ok(PoolCategory::Nature),
            "digital" => Ok(PoolCategory::Digital),
            "selfcare" => Ok(PoolCategory::Selfcare),
            "routine" => Ok(PoolCategory::Routine),
            "social" => Ok(PoolCategory::Social),
            other => bail!(
                "Unknown category '{}'. Expected one of: mental, nature, digital, selfcare, routine, social",
                other
            ),
        }
    }
}

/// How completion is demonstrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofKind {
    Mindful,
    Journal,
    Photo,
    Timer,
    Result,
    Action,
}

/// Entry of the tagged challenge pool. Independent of the tiered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolChallenge {
    pub id: &'static str,
    pub title: &'static str,
    pub category: PoolCategory,
    /// 1 (lightest) to 5 (heaviest)
    pub difficulty: u8,
    #[serde(rename = "type")]
    pub kind: ProofKind,
    /// Completion requires evidence to be submitted.
    pub proof: bool,
}

const fn entry(
    id: &'static str,
    title: &'static str,
    category: PoolCategory,
    difficulty: u8,
    kind: ProofKind,
    proof: bool,
) -> PoolChallenge {
    PoolChallenge {
        id,
        title,
        category,
        difficulty,
        kind,
        proof,
    }
}

pub static POOL: &[PoolChallenge] = &[
    entry("c1", "Заземяване „Ресет“", PoolCategory::Mental, 1, ProofKind::Mindful, false),
    entry("c2", "Емоционален „Синхрон“", PoolCategory::Mental, 1, ProofKind::Journal, true),
    entry("c3", "„Слънчев заряд“", PoolCategory::Nature, 2, ProofKind::Photo, true),
    entry("c4", "„Хранене без телефон“", PoolCategory::Digital, 2, ProofKind::Photo, true),
    entry("c5", "„30-минутен дигитален детокс“", PoolCategory::Digital, 3, ProofKind::Timer, false),
    entry("c6", "„Спокойната стъпка“", PoolCategory::Nature, 3, ProofKind::Photo, true),
    entry("c7", "„Мини организация“", PoolCategory::Selfcare, 3, ProofKind::Photo, true),
    entry("c8", "„Природна контролна точка“", PoolCategory::Nature, 4, ProofKind::Photo, true),
    entry("c9", "„Балон на фокуса“", PoolCategory::Routine, 4, ProofKind::Result, true),
    entry("c10", "„Капка доброта“", PoolCategory::Social, 5, ProofKind::Action, true),
];

/// Filter for listing the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolFilter {
    pub category: Option<PoolCategory>,
    pub proof_only: bool,
    pub max_difficulty: Option<u8>,
}

impl PoolFilter {
    pub fn matches(&self, c: &PoolChallenge) -> bool {
        self.category.map_or(true, |cat| c.category == cat)
            && (!self.proof_only || c.proof)
            && self.max_difficulty.map_or(true, |max| c.difficulty <= max)
    }
}

/// Pool entries matching `filter`, in pool order.
pub fn filter_pool(filter: &PoolFilter) -> Vec<&'static PoolChallenge> {
    POOL.iter().filter(|c| filter.matches(c)).collect()
}

pub fn find_pool_challenge(id: &str) -> Option<&'static PoolChallenge> {
    POOL.iter().find(|c| c.id == id)
}
