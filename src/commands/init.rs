use std::io::{self, Write};

use colored::Colorize;

use crate::config::{Config, DEFAULT_KEYWORD};
use crate::error::{GlassbotError, Result};

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("{}", "Glassbot Configuration".bold());
    println!("======================\n");

    let bot_token = prompt("Bot OAuth token (xoxb-...): ")?;
    if bot_token.is_empty() {
        return Err(GlassbotError::MissingSetting {
            key: "bot_token",
            env: "BOT_TOKEN",
        });
    }

    let signing_secret = prompt("Signing secret (Basic Information > App Credentials): ")?;
    if signing_secret.is_empty() {
        return Err(GlassbotError::MissingSetting {
            key: "signing_secret",
            env: "BOT_SIGNING_SECRET",
        });
    }

    let mention_user_id = prompt("User ID to mention in announcements (e.g., U024BE7LH): ")?;
    if mention_user_id.is_empty() {
        return Err(GlassbotError::MissingSetting {
            key: "mention_user_id",
            env: "USERID_TO_MENTION",
        });
    }

    let keyword = prompt(&format!("Keyword to watch for [{DEFAULT_KEYWORD}]: "))?;

    let mut config_content = format!(
        "bot_token = {}\nsigning_secret = {}\nmention_user_id = {}\n",
        toml_string(&bot_token),
        toml_string(&signing_secret),
        toml_string(&mention_user_id)
    );
    if !keyword.is_empty() {
        config_content.push_str(&format!("keyword = {}\n", toml_string(&keyword)));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GlassbotError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, config_content).map_err(|e| GlassbotError::ConfigWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now run 'glassbot handle'.");

    Ok(())
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_string_escapes_quotes() {
        let line = format!("keyword = {}\n", toml_string(r#"say "hi""#));
        let config: Config = toml::from_str(&line).unwrap();
        assert_eq!(config.keyword.as_deref(), Some(r#"say "hi""#));
    }
}
