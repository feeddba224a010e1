use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prompts for an account email on stdin
pub fn prompt_for_email() -> Result<String> {
    print!("Email: ");
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read email from stdin")?;

    let email = input.trim();
    if email.is_empty() {
        anyhow::bail!("Email cannot be empty");
    }
    Ok(email.to_string())
}

/// Prompts for the account password without echoing it
pub fn prompt_for_password() -> Result<String> {
    let password =
        rpassword::prompt_password("Password: ").context("Failed to read password from stdin")?;

    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    Ok(password)
}
