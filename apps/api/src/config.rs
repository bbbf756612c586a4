use std::str::FromStr;

use anyhow::{Context, Result};

use crate::profile::completeness::ScoringConfig;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but unparseable.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset, per-user records live in process memory.
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            required_weight: env_or("SCORE_REQUIRED_WEIGHT", defaults.required_weight)?,
            optional_weight: env_or("SCORE_OPTIONAL_WEIGHT", defaults.optional_weight)?,
            basic_required_weight: env_or("BASIC_REQUIRED_WEIGHT", defaults.basic_required_weight)?,
            basic_optional_weight: env_or("BASIC_OPTIONAL_WEIGHT", defaults.basic_optional_weight)?,
            photo_bonus: env_or("PHOTO_BONUS", defaults.photo_bonus)?,
            points_per_skill: env_or("POINTS_PER_SKILL", defaults.points_per_skill)?,
            publish_threshold: env_or("PUBLISH_THRESHOLD", defaults.publish_threshold)?,
        };

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'"))
}
