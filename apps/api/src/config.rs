use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::extraction::patterns::SkillMatchMode;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_NAME_SCAN_LINES: usize = 5;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON skills catalog. `None` means the built-in tables.
    pub skills_config: Option<PathBuf>,
    pub max_upload_bytes: usize,
    /// How many non-empty leading lines the name heuristic inspects.
    pub name_scan_lines: usize,
    /// `token` (default) or `substring`.
    pub skill_match_mode: SkillMatchMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            skills_config: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            name_scan_lines: DEFAULT_NAME_SCAN_LINES,
            skill_match_mode: SkillMatchMode::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: parse_or("PORT", &lookup, defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            skills_config: lookup("SKILLS_CONFIG")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", &lookup, defaults.max_upload_bytes)?,
            name_scan_lines: parse_or("NAME_SCAN_LINES", &lookup, defaults.name_scan_lines)?,
            skill_match_mode: parse_or("SKILL_MATCH_MODE", &lookup, defaults.skill_match_mode)?,
        })
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.skills_config.is_none());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.name_scan_lines, 5);
        assert_eq!(config.skill_match_mode, SkillMatchMode::Token);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("SKILLS_CONFIG", "/etc/skills.json"),
            ("MAX_UPLOAD_BYTES", "2048"),
            ("NAME_SCAN_LINES", "3"),
            ("SKILL_MATCH_MODE", "substring"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.skills_config, Some(PathBuf::from("/etc/skills.json")));
        assert_eq!(config.max_upload_bytes, 2048);
        assert_eq!(config.name_scan_lines, 3);
        assert_eq!(config.skill_match_mode, SkillMatchMode::Substring);
    }

    #[test]
    fn test_invalid_skill_match_mode_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("SKILL_MATCH_MODE", "fuzzy")])).unwrap_err();
        assert!(err.to_string().contains("SKILL_MATCH_MODE"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_skills_config_means_builtin() {
        let config = Config::from_lookup(lookup_from(&[("SKILLS_CONFIG", "  ")])).unwrap();
        assert!(config.skills_config.is_none());
    }
}
