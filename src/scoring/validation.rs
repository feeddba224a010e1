use std::collections::BTreeMap;

use super::config::{PointTable, ScoringConfig};
use crate::questionnaire::{options_for, Field};

/// Options the engine also accepts that the questionnaire no longer offers.
const LEGACY_OPTIONS: &[(Field, &str)] = &[(Field::ScreenTime, "Над 7")];

fn is_known_option(field: Field, value: &str) -> bool {
    options_for(field).contains(&value)
        || LEGACY_OPTIONS
            .iter()
            .any(|(f, v)| *f == field && *v == value)
}

fn check_keys<V>(
    errors: &mut Vec<String>,
    name: &str,
    field: Field,
    table: Option<&BTreeMap<String, V>>,
) {
    let Some(table) = table else {
        errors.push(format!("scoring.{}: table is missing", name));
        return;
    };

    for option in options_for(field) {
        if !table.contains_key(*option) {
            errors.push(format!("scoring.{}: no entry for option '{}'", name, option));
        }
    }

    for key in table.keys() {
        if !is_known_option(field, key) {
            errors.push(format!("scoring.{}: unknown option '{}'", name, key));
        }
    }
}

fn tables(config: &ScoringConfig) -> [(&'static str, Field, Option<&PointTable>); 9] {
    [
        ("mood", Field::Mood, config.mood.as_ref()),
        ("head_state", Field::HeadState, config.head_state.as_ref()),
        ("energy", Field::Energy, config.energy.as_ref()),
        ("screen_time", Field::ScreenTime, config.screen_time.as_ref()),
        ("phone_feeling", Field::PhoneFeeling, config.phone_feeling.as_ref()),
        ("phone_impulse", Field::PhoneImpulse, config.phone_impulse.as_ref()),
        ("last_nature", Field::LastNature, config.last_nature.as_ref()),
        ("nature_connection", Field::NatureConnection, config.nature_connection.as_ref()),
        ("readiness", Field::Readiness, config.readiness.as_ref()),
    ]
}

/// Validate scoring tables against the questionnaire.
///
/// Every option the questionnaire can produce must have an entry, and every
/// entry must name a real option. Returns all errors at once.
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (name, field, table) in tables(config) {
        check_keys(&mut errors, name, field, table);
    }
    check_keys(
        &mut errors,
        "priority_boost",
        Field::Priority,
        config.priority_boost.as_ref(),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
