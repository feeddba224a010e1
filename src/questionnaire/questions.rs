use serde::Serialize;
use std::fmt;

/// A questionnaire field, one per `Answers` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Mood,
    HeadState,
    Energy,
    ScreenTime,
    PhoneFeeling,
    PhoneImpulse,
    LastNature,
    NatureConnection,
    Readiness,
    DifficultyPreference,
    Priority,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Mood,
        Field::HeadState,
        Field::Energy,
        Field::ScreenTime,
        Field::PhoneFeeling,
        Field::PhoneImpulse,
        Field::LastNature,
        Field::NatureConnection,
        Field::Readiness,
        Field::DifficultyPreference,
        Field::Priority,
    ];

    /// Key used in the answers payload.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Mood => "mood",
            Field::HeadState => "headState",
            Field::Energy => "energy",
            Field::ScreenTime => "screenTime",
            Field::PhoneFeeling => "phoneFeeling",
            Field::PhoneImpulse => "phoneImpulse",
            Field::LastNature => "lastNature",
            Field::NatureConnection => "natureConnection",
            Field::Readiness => "readiness",
            Field::DifficultyPreference => "difficultyPreference",
            Field::Priority => "priority",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A question as shown to the user.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub field: Field,
    pub prompt: &'static str,
    /// Multiple options may be chosen.
    pub multi: bool,
    pub options: &'static [&'static str],
}

pub const DAILY_QUESTIONS: &[Question] = &[
    Question {
        field: Field::Mood,
        prompt: "Как би описал вътрешното си състояние тази сутрин?",
        multi: false,
        options: &[
            "Спокоен и уравновесен",
            "Леко напрегнат",
            "Раздразнен/претоварен",
            "Тревожен",
            "Емоционално изтощен",
        ],
    },
    Question {
        field: Field::HeadState,
        prompt: "Мислиш ли спокойно или се чувстваш претоварен с мисли?",
        multi: false,
        options: &[
            "Ясно и фокусирано",
            "Малко хаотично",
            "Много хаотично",
            "Усещам „ментален шум“",
        ],
    },
    Question {
        field: Field::Energy,
        prompt: "Как би оценил енергията си?",
        multi: false,
        options: &["Висока", "Средна", "Ниска", "Много ниска"],
    },
    Question {
        field: Field::ScreenTime,
        prompt: "Колко време реално прекара на телефона вчера?",
        multi: false,
        options: &["Под 1 час", "1–3 часа", "3–5 часа", "5–7 часа", "Над 7 часа"],
    },
    Question {
        field: Field::PhoneFeeling,
        prompt: "Какво усещане ти носеше използването на телефона вчера?",
        multi: true,
        options: &[
            "Удоволствие",
            "Бягство от стрес",
            "Автоматичен навик",
            "Отегчение",
            "Негативни емоции",
        ],
    },
    Question {
        field: Field::PhoneImpulse,
        prompt: "Има ли сегашна ситуация или емоция, която те кара да посягаш към телефона по-често днес?",
        multi: false,
        options: &[
            "Да, стрес",
            "Да, скука",
            "Да, липса на мотивация",
            "Да, тревожност",
            "Не, днес се чувствам стабилен",
        ],
    },
    Question {
        field: Field::LastNature,
        prompt: "Кога последно прекара време навън в природата?",
        multi: false,
        options: &["Днес", "Вчера", "Няколко дни", "Повече от седмица"],
    },
    Question {
        field: Field::NatureConnection,
        prompt: "Как оценяваш връзката си с природата днес?",
        multi: false,
        options: &["Силна — чувствам се свързан", "Средна", "Слаба", "Почти никаква"],
    },
    Question {
        field: Field::Readiness,
        prompt: "До каква степен си готов да отделиш време за себе си днес?",
        multi: false,
        options: &[
            "Напълно мотивиран",
            "Умерено мотивиран",
            "Почти нямам сили",
            "Искам да опитам, но съм изтощен",
        ],
    },
    Question {
        field: Field::Priority,
        prompt: "Кое би ти донесло най-много полза в момента?",
        multi: false,
        options: &[
            "Намаляване на телефона",
            "Подобряване на емоционалното състояние",
            "Работа върху фокус и продуктивност",
            "Контакт с природата",
            "Малки навици за спокойствие",
        ],
    },
    Question {
        field: Field::DifficultyPreference,
        prompt: "Колко труден да бъде днешният ти избор?",
        multi: false,
        options: &["Лесен", "Среден", "Предизвикателен"],
    },
];

/// Look up the question for a field.
pub fn question_for(field: Field) -> Option<&'static Question> {
    DAILY_QUESTIONS.iter().find(|q| q.field == field)
}

/// Options the questionnaire offers for a field (empty for unknown fields).
pub fn options_for(field: Field) -> &'static [&'static str] {
    question_for(field).map(|q| q.options).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_field_has_a_question() {
        for field in Field::ALL {
            assert!(question_for(field).is_some(), "no question for {}", field);
        }
        assert_eq!(DAILY_QUESTIONS.len(), Field::ALL.len());
    }

    #[test]
    fn test_only_phone_feeling_is_multi() {
        let multi: Vec<Field> = DAILY_QUESTIONS
            .iter()
            .filter(|q| q.multi)
            .map(|q| q.field)
            .collect();
        assert_eq!(multi, vec![Field::PhoneFeeling]);
    }

    #[test]
    fn test_options_are_unique_and_trimmed() {
        for q in DAILY_QUESTIONS {
            let mut seen = HashSet::new();
            for opt in q.options {
                assert_eq!(opt.trim(), *opt);
                assert!(seen.insert(opt), "duplicate option {} in {}", opt, q.field);
            }
        }
    }

    #[test]
    fn test_field_keys_match_payload() {
        assert_eq!(Field::HeadState.key(), "headState");
        assert_eq!(Field::DifficultyPreference.to_string(), "difficultyPreference");
    }
}
