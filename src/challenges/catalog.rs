use serde::Serialize;
use std::fmt;

/// Difficulty tier, ordered by intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// A daily challenge from the tiered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

pub static CATALOG: &[Challenge] = &[
    Challenge {
        id: 1,
        title: "Заземяване „Ресет“",
        description: "3 минути бавно дишане + назови 5 неща, които виждаш около себе си.",
        difficulty: Difficulty::Easy,
    },
    Challenge {
        id: 2,
        title: "Емоционален синхрон",
        description: "Напиши 2–3 изречения за това как се чувстваш и защо.",
        difficulty: Difficulty::Easy,
    },
    Challenge {
        id: 3,
        title: "Слънчев заряд",
        description: "Излез за 1–2 мин на естествена светлина и направи снимка.",
        difficulty: Difficulty::Easy,
    },
    Challenge {
        id: 4,
        title: "Хранене без телефон",
        description: "Изяж едно хранене или изпий напитка без да докосваш телефона.",
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: 5,
        title: "30-мин Дигитален детокс",
        description: "30 минути без телефон. Пусни таймер.",
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: 6,
        title: "Спокойна стъпка",
        description: "2–4 мин mindful разходка + снимка на нещо, което ти направи впечатление.",
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: 7,
        title: "Мини организация",
        description: "Подреди малка зона за 5 мин (бюро, рафт, чанта).",
        difficulty: Difficulty::Medium,
    },
    Challenge {
        id: 8,
        title: "Природна контролна точка",
        description: "Кратка разходка навън + снимка на пейзаж/дърво.",
        difficulty: Difficulty::Hard,
    },
    Challenge {
        id: 9,
        title: "Балон на фокуса",
        description: "10–15 мин дълбока работа + снимка на резултата.",
        difficulty: Difficulty::Hard,
    },
    Challenge {
        id: 10,
        title: "Капка доброта",
        description: "Изпрати съобщение: благодарност, извинение или подкрепа към някого.",
        difficulty: Difficulty::Hard,
    },
];

/// Challenges of one tier, in catalog order.
pub fn by_difficulty(level: Difficulty) -> impl Iterator<Item = &'static Challenge> {
    CATALOG.iter().filter(move |c| c.difficulty == level)
}

pub fn find_challenge(id: u32) -> Option<&'static Challenge> {
    CATALOG.iter().find(|c| c.id == id)
}
