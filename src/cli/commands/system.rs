use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;
use crate::errors::CliError;
use crate::utils::build_info;

use super::registry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
    ]
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    let mut out = context.report();
    out.section(format!("finbti {}", meta.version));
    out.info(format!("  Build hash : {}", meta.git_hash));
    out.info(format!("  Built at   : {}", meta.timestamp));
    out.info(format!("  Target     : {}", meta.target));
    out.info(format!("  Profile    : {}", meta.profile));
    Ok(out.finish())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let registry = registry();
    let mut out = context.report();

    if let Some(name) = args.first() {
        let entry = registry
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?;
        out.section(entry.name);
        out.info(entry.description);
        out.detail(format!("usage: {}", entry.usage));
        return Ok(out.finish());
    }

    out.section("finbti commands");
    let width = registry.names().map(str::len).max().unwrap_or(0);
    for entry in registry.iter() {
        out.info(format!("{:<width$}  {}", entry.name, entry.description));
    }
    out.blank_line();
    out.detail("Global flags: --today YYYY-MM-DD, --json, --plain");
    Ok(out.finish())
}
