use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::answers::Answers;
use super::questions::{Question, DAILY_QUESTIONS};

/// Parse a numbered selection ("2" or "1, 3") against `count` options.
///
/// Returns zero-based indices. Empty input means "skip" and yields an empty
/// list. Repeated numbers are collapsed.
pub fn parse_selection(input: &str, count: usize, multi: bool) -> Result<Vec<usize>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut picked = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let n: usize = part
            .parse()
            .map_err(|_| format!("'{}' is not a number", part))?;
        if n < 1 || n > count {
            return Err(format!("{} is out of range 1-{}", n, count));
        }
        if !picked.contains(&(n - 1)) {
            picked.push(n - 1);
        }
    }

    if !multi && picked.len() > 1 {
        return Err("only one option may be chosen".to_string());
    }
    Ok(picked)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("Failed to read input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_question<W: Write>(out: &mut W, number: usize, question: &Question) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}. {}", number, question.prompt)?;
    for (i, opt) in question.options.iter().enumerate() {
        writeln!(out, "   {}) {}", i + 1, opt)?;
    }
    Ok(())
}

/// Walk through the daily questionnaire, reading choices from `input`.
///
/// Empty lines skip a question. Invalid input re-prompts. End of input stops
/// early and returns what was answered so far.
pub fn ask_questions<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Answers> {
    let mut answers = Answers::default();

    'questions: for (i, question) in DAILY_QUESTIONS.iter().enumerate() {
        print_question(out, i + 1, question)?;
        let hint = if question.multi {
            "Choose one or more (e.g. 1,3), Enter to skip: "
        } else {
            "Choose one, Enter to skip: "
        };

        loop {
            write!(out, "{}", hint)?;
            out.flush().context("Failed to flush output")?;

            let Some(line) = read_line(input)? else {
                break 'questions;
            };

            match parse_selection(&line, question.options.len(), question.multi) {
                Ok(indices) => {
                    for idx in indices {
                        answers.set(question.field, question.options[idx]);
                    }
                    break;
                }
                Err(e) => writeln!(out, "  Invalid: {}. Try again.", e)?,
            }
        }
    }

    Ok(answers)
}

/// Run the questionnaire on the terminal.
pub fn ask_interactive() -> Result<Answers> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    ask_questions(&mut input, &mut out)
}
