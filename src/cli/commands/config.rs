use finbti_config::{Config, GroupingKey};

use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::{OutputMode, ShellContext};
use crate::errors::{CliError, FinbtiError};

use super::to_json;

const CONFIG_USAGE: &str = "config [show | set <locale|currency|ledger_grouping|ui_color_enabled> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change stored preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show(context),
        ["set", key, value] => {
            apply(&mut context.config, key, value)?;
            context.config_manager.save(&context.config)?;
            tracing::info!(key = *key, "configuration updated");
            let mut out = context.report();
            out.success(format!("{key} updated."));
            Ok(out.finish())
        }
        _ => Err(CliError::Usage(CONFIG_USAGE.to_string())),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    if context.mode == OutputMode::Json {
        return to_json(config);
    }
    let mut out = context.report();
    out.section("Configuration");
    out.info(format!("locale           : {}", config.locale));
    out.info(format!("currency         : {}", config.currency));
    out.info(format!("ledger_grouping  : {}", config.ledger_grouping));
    out.info(format!("ui_color_enabled : {}", config.ui_color_enabled));
    out.detail(format!("stored at {}", context.config_manager.config_path().display()));
    Ok(out.finish())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<(), FinbtiError> {
    let value = value.trim();
    match key {
        "locale" => {
            if value.is_empty() {
                return Err(FinbtiError::InvalidInput("locale must not be empty".into()));
            }
            config.locale = value.to_string();
        }
        "currency" => {
            if value.len() != 3 || !value.chars().all(|ch| ch.is_ascii_alphabetic()) {
                return Err(FinbtiError::InvalidInput(format!(
                    "currency must be a three letter code, got `{value}`"
                )));
            }
            config.currency = value.to_ascii_uppercase();
        }
        "ledger_grouping" => config.ledger_grouping = GroupingKey::parse(value),
        "ui_color_enabled" => config.ui_color_enabled = parse_flag(value)?,
        other => {
            return Err(FinbtiError::InvalidInput(format!(
                "unknown configuration key `{other}`"
            )))
        }
    }
    Ok(())
}

fn parse_flag(value: &str) -> Result<bool, FinbtiError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(FinbtiError::InvalidInput(format!(
            "expected true or false, got `{value}`"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_normalizes_values() {
        let mut config = Config::default();
        apply(&mut config, "currency", "usd").expect("currency");
        apply(&mut config, "ledger_grouping", "calendar-date").expect("grouping");
        apply(&mut config, "ui_color_enabled", "off").expect("color");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.ledger_grouping, GroupingKey::CalendarDate);
        assert!(!config.ui_color_enabled);
    }

    #[test]
    fn apply_rejects_bad_input() {
        let mut config = Config::default();
        assert!(apply(&mut config, "currency", "dollars").is_err());
        assert!(apply(&mut config, "ui_color_enabled", "maybe").is_err());
        assert!(apply(&mut config, "theme", "dark").is_err());
        assert_eq!(config.currency, "KRW");
    }
}
