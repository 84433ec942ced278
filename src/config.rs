use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{GlassbotError, Result};

pub const DEFAULT_KEYWORD: &str = "glassware";
pub const DEFAULT_API_URL: &str = "https://slack.com/api/chat.postMessage";

#[derive(Deserialize, Default)]
pub struct Config {
    pub bot_token: Option<String>,
    pub signing_secret: Option<String>,
    pub mention_user_id: Option<String>,
    pub keyword: Option<String>,
    pub api_url: Option<String>,
    pub allow_unsigned: Option<bool>,
}

/// Validated settings the handler is built from. Read once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bot_token: String,
    pub signing_secret: String,
    pub mention_user_id: String,
    pub keyword: String,
    pub api_url: Url,
    /// Process bare payloads that carry no signature metadata.
    pub allow_unsigned: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| GlassbotError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| GlassbotError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "glassbot")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(GlassbotError::NoConfigDir)
    }

    /// Resolve settings with env vars taking precedence over the config file
    pub fn resolve(&self) -> Result<Settings> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    pub fn resolve_with<F>(&self, env: F) -> Result<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str, var: &'static str, file: &Option<String>| {
            env(var)
                .or_else(|| file.clone())
                .filter(|v| !v.is_empty())
                .ok_or(GlassbotError::MissingSetting { key, env: var })
        };

        let bot_token = required("bot_token", "BOT_TOKEN", &self.bot_token)?;
        let signing_secret = required("signing_secret", "BOT_SIGNING_SECRET", &self.signing_secret)?;
        let mention_user_id =
            required("mention_user_id", "USERID_TO_MENTION", &self.mention_user_id)?;

        let keyword = env("GLASSBOT_KEYWORD")
            .or_else(|| self.keyword.clone())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEFAULT_KEYWORD.to_string());

        let api_url = env("GLASSBOT_API_URL")
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url).map_err(|_| GlassbotError::InvalidUrl(api_url))?;

        let allow_unsigned = match env("GLASSBOT_ALLOW_UNSIGNED") {
            Some(raw) => parse_bool(&raw).ok_or(GlassbotError::InvalidSetting {
                key: "allow_unsigned",
                value: raw,
            })?,
            None => self.allow_unsigned.unwrap_or(true),
        };

        Ok(Settings {
            bot_token,
            signing_secret,
            mention_user_id,
            keyword,
            api_url,
            allow_unsigned,
        })
    }
}

impl Settings {
    /// The fixed reply posted whenever the keyword is spotted.
    pub fn announce_text(&self) -> String {
        format!("<@{}>. Glassware.", self.mention_user_id)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
