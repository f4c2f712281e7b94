use anyhow::{ensure, Context, Result};
use chrono::NaiveDate;
use contracts::enums::Language;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// localStorage key holding an optional TOML override of the whole config
pub const CONFIG_STORAGE_KEY: &str = "portal_config";

/// Built-in default configuration
pub const DEFAULT_CONFIG: &str = r#"
[portal]
school_name = "Colegio San Isidro"
default_language = "es-ES"
reference_date = "2026-03-18"

[identity]
user_id = "usr-001"
username = "lgarcia"
full_name = "Laura García"
student_name = "Pablo García"
roles = ["parent"]

[live_updates]
enabled = true
url = "/api/live/messages"
max_attempts = 5
retry_step_ms = 2000

[calendar]
confirm_delay_ms = 600
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub portal: PortalConfig,
    pub identity: IdentityConfig,
    pub live_updates: LiveUpdatesConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub school_name: String,
    #[serde(default)]
    pub default_language: Language,
    /// Fixed "today" for the mock school year; the browser clock when absent
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    /// Raw role tags as the identity provider hands them over
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveUpdatesConfig {
    #[serde(default)]
    pub enabled: bool,
    pub url: String,
    pub max_attempts: u32,
    pub retry_step_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub confirm_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portal: PortalConfig {
                school_name: "Colegio San Isidro".to_string(),
                default_language: Language::EsEs,
                reference_date: NaiveDate::from_ymd_opt(2026, 3, 18),
            },
            identity: IdentityConfig {
                user_id: "usr-001".to_string(),
                username: "lgarcia".to_string(),
                full_name: Some("Laura García".to_string()),
                student_name: Some("Pablo García".to_string()),
                roles: vec!["parent".to_string()],
            },
            live_updates: LiveUpdatesConfig {
                enabled: true,
                url: "/api/live/messages".to_string(),
                max_attempts: 5,
                retry_step_ms: 2000,
            },
            calendar: CalendarConfig {
                confirm_delay_ms: 600,
            },
        }
    }
}

impl Config {
    fn validate(&self) -> Result<()> {
        ensure!(
            !self.portal.school_name.trim().is_empty(),
            "portal.school_name must not be empty"
        );
        if self.live_updates.enabled {
            ensure!(
                !self.live_updates.url.trim().is_empty(),
                "live_updates.url is required when live updates are enabled"
            );
            ensure!(
                self.live_updates.retry_step_ms > 0,
                "live_updates.retry_step_ms must be positive"
            );
        }
        Ok(())
    }

    /// Reference date used for "upcoming" and "overdue" checks
    pub fn today(&self) -> NaiveDate {
        self.portal
            .reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }
}

/// Parse and validate a TOML configuration document
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text).context("Failed to parse portal configuration")?;
    config.validate()?;
    Ok(config)
}

fn stored_override() -> Option<String> {
    window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

/// Load configuration: localStorage override first, embedded default otherwise.
///
/// An override that fails to parse is logged and ignored.
pub fn load_config() -> Result<Config> {
    if let Some(text) = stored_override() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Loading configuration from localStorage ({CONFIG_STORAGE_KEY})");
                return Ok(config);
            }
            Err(err) => {
                log::warn!("Ignoring invalid configuration override: {err:#}");
            }
        }
    }

    log::info!("Using embedded default configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_embedded_toml() {
        let parsed = parse_config(DEFAULT_CONFIG).expect("embedded config must parse");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let text = r#"
            [portal]
            school_name = "IES Cervantes"

            [identity]
            user_id = "u9"
            username = "admin"
            roles = ["administrator", "teacher"]

            [live_updates]
            url = ""
            max_attempts = 0
            retry_step_ms = 0

            [calendar]
            confirm_delay_ms = 0
        "#;
        let config = parse_config(text).unwrap();
        assert_eq!(config.portal.default_language, Language::EsEs);
        assert_eq!(config.portal.reference_date, None);
        assert!(!config.live_updates.enabled);
        assert_eq!(config.identity.full_name, None);
        assert_eq!(config.identity.roles, vec!["administrator", "teacher"]);
    }

    #[test]
    fn test_english_default_language() {
        let text = DEFAULT_CONFIG.replace("\"es-ES\"", "\"en-US\"");
        let config = parse_config(&text).unwrap();
        assert_eq!(config.portal.default_language, Language::EnUs);
    }

    #[test]
    fn test_enabled_live_updates_require_url() {
        let text = DEFAULT_CONFIG.replace("\"/api/live/messages\"", "\"\"");
        let err = parse_config(&text).unwrap_err();
        assert!(err.to_string().contains("live_updates.url"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_config("[portal\nschool_name=").is_err());
    }

    #[test]
    fn test_reference_date_drives_today() {
        let config = Config::default();
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2026, 3, 18).unwrap());
    }
}
