use finbti_domain::GroupingKey;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const HOME_ENV: &str = "FINBTI_HOME";
const DEFAULT_DIR_NAME: &str = ".finbti";

/// Stores user-configurable preferences for rendering aggregated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub ledger_grouping: GroupingKey,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            ledger_grouping: GroupingKey::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "ko-KR".into()
    }

    pub fn default_currency() -> String {
        "KRW".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Application data directory: `$FINBTI_HOME`, else `~/.finbti`.
    pub fn app_data_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}
