use std::collections::HashSet;

use wellquest::challenges::{generate_daily_challenges, MAX_DAILY_CHALLENGES};
use wellquest::questionnaire::{
    options_for, parse_answers, Answers, AnswersFormat, Field, DAILY_QUESTIONS,
};
use wellquest::scoring::{calculate_scores, CategoryScores, ScoringConfig};

fn answers_from(pairs: &[(Field, &str)]) -> Answers {
    let mut answers = Answers::default();
    for (field, value) in pairs {
        answers.set(*field, *value);
    }
    answers
}

/// Every single-option combination of a few fields that drive the rules,
/// which is enough to hit every rule and every overlap between them.
fn rule_driving_answers() -> Vec<Answers> {
    let with_blank = |field: Field| {
        let mut opts: Vec<&str> = options_for(field).to_vec();
        opts.push("");
        opts
    };

    let mut all = Vec::new();
    for mood in ["", "Емоционално изтощен"] {
        for energy in with_blank(Field::Energy) {
            for readiness in ["", "Напълно мотивиран"] {
                for screen in with_blank(Field::ScreenTime) {
                    for nature in ["", "Повече от седмица"] {
                        for pref in with_blank(Field::DifficultyPreference) {
                            all.push(answers_from(&[
                                (Field::Mood, mood),
                                (Field::Energy, energy),
                                (Field::Readiness, readiness),
                                (Field::ScreenTime, screen),
                                (Field::LastNature, nature),
                                (Field::DifficultyPreference, pref),
                            ]));
                        }
                    }
                }
            }
        }
    }
    all
}

#[test]
fn unknown_values_everywhere_score_zero() {
    let mut answers = Answers::default();
    for field in Field::ALL {
        answers.set(field, "not an option");
    }

    let result = calculate_scores(&answers, &ScoringConfig::default());
    assert_eq!(result.categories, CategoryScores::default());
    assert_eq!(result.total, 0);
}

#[test]
fn phone_feeling_order_does_not_matter() {
    let config = ScoringConfig::default();
    let tags = options_for(Field::PhoneFeeling);

    let mut forward = Answers::default();
    for tag in tags {
        forward.set(Field::PhoneFeeling, *tag);
    }
    let mut backward = Answers::default();
    for tag in tags.iter().rev() {
        backward.set(Field::PhoneFeeling, *tag);
    }

    assert_eq!(
        calculate_scores(&forward, &config),
        calculate_scores(&backward, &config)
    );

    let from_json: Answers = serde_json::from_str(
        r#"{"phoneFeeling": ["Негативни емоции", "Удоволствие", "Негативни емоции"]}"#,
    )
    .unwrap();
    let from_yaml = parse_answers(
        "phoneFeeling:\n  - Удоволствие\n  - Негативни емоции\n",
        AnswersFormat::Yaml,
    )
    .unwrap();
    assert_eq!(
        calculate_scores(&from_json, &config),
        calculate_scores(&from_yaml, &config)
    );
}

#[test]
fn scoring_is_repeatable_and_leaves_tables_untouched() {
    let config = ScoringConfig::default();
    let mut answers = Answers::default();
    for q in DAILY_QUESTIONS {
        answers.set(q.field, q.options[q.options.len() - 1]);
    }

    let first = calculate_scores(&answers, &config);
    for _ in 0..10 {
        assert_eq!(calculate_scores(&answers, &config), first);
    }
    assert_eq!(config, ScoringConfig::default());
    assert!(first.total > 0);
}

#[test]
fn generated_sets_are_small_and_unique() {
    for answers in rule_driving_answers() {
        let set = generate_daily_challenges(&answers);
        assert!(set.challenges.len() <= MAX_DAILY_CHALLENGES);

        let ids: HashSet<u32> = set.challenges.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), set.challenges.len(), "duplicates for {:?}", answers);
    }
}

#[test]
fn overlapping_rules_keep_rule_order_and_cut_at_three() {
    let cases: &[(&[(Field, &str)], &[u32])] = &[
        // exhausted [1, 2] + heavy screen [5] + no nature [6]
        (
            &[
                (Field::Energy, "Ниска"),
                (Field::ScreenTime, "Над 7 часа"),
                (Field::LastNature, "Повече от седмица"),
            ],
            &[1, 2, 5],
        ),
        // heavy screen [5] + no nature [6] + medium [4]
        (
            &[
                (Field::ScreenTime, "5–7 часа"),
                (Field::LastNature, "Повече от седмица"),
                (Field::DifficultyPreference, "Среден"),
            ],
            &[5, 6, 4],
        ),
        // energized [8, 9] + challenging [8]
        (
            &[
                (Field::Energy, "Висока"),
                (Field::Readiness, "Напълно мотивиран"),
                (Field::DifficultyPreference, "Предизвикателен"),
            ],
            &[8, 9],
        ),
        // exhausted mood [1, 2] + energized [8, 9]
        (
            &[
                (Field::Mood, "Емоционално изтощен"),
                (Field::Energy, "Висока"),
                (Field::Readiness, "Напълно мотивиран"),
            ],
            &[1, 2, 8],
        ),
        // exhausted [1, 2] + easy [1]
        (
            &[
                (Field::Energy, "Много ниска"),
                (Field::DifficultyPreference, "Лесен"),
            ],
            &[1, 2],
        ),
        // no nature [6] + easy [1]
        (
            &[
                (Field::LastNature, "Повече от седмица"),
                (Field::DifficultyPreference, "Лесен"),
            ],
            &[6, 1],
        ),
    ];

    for (pairs, expected) in cases {
        let answers = answers_from(pairs);
        assert_eq!(
            generate_daily_challenges(&answers).ids(),
            expected.to_vec(),
            "for {:?}",
            pairs
        );
    }
}

#[test]
fn malformed_answer_values_still_score() {
    let answers = parse_answers(
        r#"{"phoneFeeling": null, "mood": 7, "readiness": [], "energy": "Много ниска"}"#,
        AnswersFormat::Json,
    )
    .unwrap();

    let result = calculate_scores(&answers, &ScoringConfig::default());
    assert_eq!(result.categories.mental, 3);
    assert_eq!(result.total, 3);
    assert_eq!(generate_daily_challenges(&answers).ids(), vec![1, 2]);
}

#[test]
fn very_low_energy_example() {
    let answers = answers_from(&[(Field::Energy, "Много ниска")]);
    let set = generate_daily_challenges(&answers);

    assert_eq!(set.ids(), vec![1, 2]);
    assert_eq!(set.challenges[0].title, "Заземяване „Ресет“");
    assert_eq!(set.challenges[1].title, "Емоционален синхрон");
}

#[test]
fn energized_and_motivated_example() {
    let answers = answers_from(&[
        (Field::Energy, "Висока"),
        (Field::Readiness, "Напълно мотивиран"),
    ]);
    assert_eq!(generate_daily_challenges(&answers).ids(), vec![8, 9]);
}

#[test]
fn medium_preference_example() {
    let answers = answers_from(&[(Field::DifficultyPreference, "Среден")]);
    assert_eq!(generate_daily_challenges(&answers).ids(), vec![4]);
}

#[test]
fn generated_set_serializes_like_the_form_payload() {
    let answers = answers_from(&[(Field::DifficultyPreference, "Предизвикателен")]);
    let json = serde_json::to_value(generate_daily_challenges(&answers)).unwrap();

    assert_eq!(json["challenges"][0]["id"], 8);
    assert_eq!(json["challenges"][0]["difficulty"], "hard");
}
