use std::str::FromStr;

use tracing::Level;

pub const PER_PAGE: u32 = 10;

const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub api_base: String,
    pub per_page: u32,
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            per_page: PER_PAGE,
            log_level: Level::INFO,
        }
    }
}

/// Settings baked in at build time through `STATEMENT_API_BASE` and
/// `STATEMENT_LOG_LEVEL`.
pub fn load_settings() -> Settings {
    settings_from(
        option_env!("STATEMENT_API_BASE"),
        option_env!("STATEMENT_LOG_LEVEL"),
    )
}

fn settings_from(api_base: Option<&str>, log_level: Option<&str>) -> Settings {
    let mut settings = Settings::default();

    if let Some(v) = api_base.map(str::trim).filter(|v| !v.is_empty()) {
        settings.api_base = v.trim_end_matches('/').to_string();
    }
    if let Some(level) = log_level.and_then(|v| Level::from_str(v.trim()).ok()) {
        settings.log_level = level;
    }

    settings
}
