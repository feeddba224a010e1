use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::api::{BackendUser, DiaryEntry, Goal, Quest};
use crate::challenges::{Challenge, Difficulty, GeneratedChallengeSet, PoolChallenge};
use crate::progress::LevelProgress;
use crate::questionnaire::DAILY_QUESTIONS;
use crate::scoring::{Category, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn paint_difficulty(difficulty: Difficulty, use_colors: bool) -> String {
    let label = format!("{:<6}", difficulty.to_string());
    if !use_colors {
        return label;
    }
    match difficulty {
        Difficulty::Easy => label.green().to_string(),
        Difficulty::Medium => label.yellow().to_string(),
        Difficulty::Hard => label.red().to_string(),
    }
}

/// Format category scores, one per line, then the total.
/// With `explain`, each matched answer is listed with its points.
pub fn format_scores(result: &ScoreResult, explain: bool, use_colors: bool) -> String {
    let mut lines = Vec::new();

    for category in Category::ALL {
        let value = result.categories.get(category);
        let name = format!("{:<9}", category.name());
        if use_colors {
            lines.push(format!("{} {:>4}", name.cyan(), value));
        } else {
            lines.push(format!("{} {:>4}", name, value));
        }
    }

    let total_label = format!("{:<9}", "total");
    if use_colors {
        lines.push(format!("{} {:>4}", total_label.bold(), result.total.bold()));
    } else {
        lines.push(format!("{} {:>4}", total_label, result.total));
    }

    if explain {
        lines.push(String::new());
        if result.breakdown.is_empty() {
            lines.push("No answers matched the scoring tables.".to_string());
        }
        for c in &result.breakdown {
            lines.push(format!(
                "  {:+} {} <- {} = {}",
                c.points, c.category, c.field, c.value
            ));
        }
    }

    lines.join("\n")
}

fn format_challenge(index: usize, challenge: &Challenge, width: Option<usize>, use_colors: bool) -> String {
    let title = if use_colors {
        challenge.title.bold().to_string()
    } else {
        challenge.title.to_string()
    };
    let description = match width {
        // "     " indent
        Some(w) if w > 10 => truncate(challenge.description, w - 5),
        _ => challenge.description.to_string(),
    };
    format!(
        "{:>2}. {} {}\n     {}",
        index,
        paint_difficulty(challenge.difficulty, use_colors),
        title,
        description
    )
}

/// Format today's generated challenges as a numbered list.
pub fn format_challenges(set: &GeneratedChallengeSet, use_colors: bool) -> String {
    if set.challenges.is_empty() {
        return "No challenges matched today's answers.".to_string();
    }
    let width = get_terminal_width();
    set.challenges
        .iter()
        .enumerate()
        .map(|(i, c)| format_challenge(i + 1, c, width, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the full tiered catalog with ids.
pub fn format_catalog(catalog: &[Challenge], use_colors: bool) -> String {
    let width = get_terminal_width();
    catalog
        .iter()
        .map(|c| format_challenge(c.id as usize, c, width, use_colors))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format pool entries, one line each: id, difficulty, category, type, proof, title.
pub fn format_pool(entries: &[&PoolChallenge], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No pool challenges match.".to_string();
    }
    entries
        .iter()
        .map(|c| {
            let proof = if c.proof { "proof" } else { "" };
            let kind = serde_json::to_value(c.kind)
                .ok()
                .and_then(|v| v.as_str().map(String::from))
                .unwrap_or_default();
            let meta = format!(
                "{:<4} {} {:<9} {:<8} {:<5}",
                c.id,
                c.difficulty,
                c.category.to_string(),
                kind,
                proof
            );
            if use_colors {
                format!("{} {}", meta.dimmed(), c.title)
            } else {
                format!("{} {}", meta, c.title)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the questionnaire with numbered options.
pub fn format_questions(use_colors: bool) -> String {
    DAILY_QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let header = format!("{}. {}", i + 1, q.prompt);
            let header = if use_colors {
                header.bold().to_string()
            } else {
                header
            };
            let key = if q.multi {
                format!("   [{}, multiple]", q.field)
            } else {
                format!("   [{}]", q.field)
            };
            let options = q
                .options
                .iter()
                .enumerate()
                .map(|(j, o)| format!("   {}) {}", j + 1, o))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{}\n{}", header, key, options)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format a user's level, XP and streaks.
pub fn format_status(user: &BackendUser, progress: &LevelProgress, use_colors: bool) -> String {
    let name = if use_colors {
        user.name.bold().to_string()
    } else {
        user.name.clone()
    };
    let mut lines = vec![
        format!("{} ({})", name, user.mail),
        format!(
            "  Level {}  {}/100 XP  ({} to next, {} total)",
            progress.level, progress.current_xp, progress.xp_to_next, progress.total_xp
        ),
        format!(
            "  Streak: {} days (longest {})",
            user.current_streak, user.longest_streak
        ),
    ];
    if let Some(last) = user.last_active {
        lines.push(format!("  Last active: {}", last));
    }
    lines.join("\n")
}

/// Format a backend quest: name, description, reward.
pub fn format_quest(quest: &Quest, use_colors: bool) -> String {
    let name = if use_colors {
        quest.name.bold().to_string()
    } else {
        quest.name.clone()
    };
    let mut lines = vec![name];
    if !quest.description.trim().is_empty() {
        lines.push(format!("  {}", quest.description.trim()));
    }
    lines.push(format!("  Reward: {} XP", quest.points_received));
    if quest.required_points > 0 {
        lines.push(format!("  Unlocked at {} XP", quest.required_points));
    }
    lines.push(format!("  id: {}", quest.id));
    lines.join("\n")
}

/// Format personal goals, one per line with the id first.
pub fn format_goals(goals: &[Goal], use_colors: bool) -> String {
    if goals.is_empty() {
        return "No goals yet.".to_string();
    }
    let width = get_terminal_width();
    goals
        .iter()
        .map(|g| {
            let category = if g.category.is_empty() { "-" } else { g.category.as_str() };
            let mut text = g.name.clone();
            if !g.description.is_empty() {
                text = format!("{} ({})", text, g.description);
            }
            if let Some(due) = g.due_date.as_deref().filter(|d| !d.is_empty()) {
                text = format!("{}, due {}", text, due);
            }
            let meta = format!("{:<10} {:<10}", g.id, category);
            let text = match width {
                Some(w) => truncate(&text, w.saturating_sub(22).max(10)),
                None => text,
            };
            if use_colors {
                format!("{} {}", meta.dimmed(), text)
            } else {
                format!("{} {}", meta, text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format diary entries as dated blocks in the given order.
pub fn format_diary(entries: &[DiaryEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "The diary is empty.".to_string();
    }
    entries
        .iter()
        .map(|e| {
            let mood = if e.mood.is_empty() { "-" } else { e.mood.as_str() };
            let header = format!("{} {} [{}]", e.date, mood, e.id);
            let header = if use_colors {
                header.bold().to_string()
            } else {
                header
            };
            let body = e
                .content
                .lines()
                .map(|l| format!("  {}", l))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n{}", header, body)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
