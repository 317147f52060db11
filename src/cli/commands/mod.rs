pub mod config;
pub mod format;
pub mod goal;
pub mod ledger;
pub mod mbti;
pub mod system;

use std::path::Path;

use serde::Serialize;

use crate::errors::{CliError, FinbtiError};

use super::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(ledger::definitions());
    commands.extend(goal::definitions());
    commands.extend(mbti::definitions());
    commands.extend(format::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub fn registry() -> CommandRegistry {
    CommandRegistry::new(all_definitions())
}

/// First positional argument as a path, or a usage error.
pub(crate) fn required_path<'a>(args: &[&'a str], usage: &str) -> Result<&'a Path, CliError> {
    args.first()
        .map(|arg| Path::new(*arg))
        .ok_or_else(|| CliError::Usage(usage.to_string()))
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value).map_err(FinbtiError::from)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_is_registered_once() {
        let definitions = all_definitions();
        let registry = registry();
        assert_eq!(registry.names().count(), definitions.len());
        for name in ["ledger", "goal", "goal-request", "mbti-scores", "mbti-answers", "help"] {
            assert!(registry.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn required_path_reports_usage() {
        let err = required_path(&[], "ledger <file>").expect_err("no args");
        assert_eq!(err.to_string(), "Usage: ledger <file>");
        assert_eq!(required_path(&["a.json"], "x").expect("path"), Path::new("a.json"));
    }
}
