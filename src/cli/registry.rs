use std::collections::HashMap;

use crate::errors::CliError;

use super::shell_context::ShellContext;

/// Rendered command output, or the error that stopped it.
pub type CommandResult = Result<String, CliError>;
pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandEntry>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            if commands.insert(definition.name, definition.clone()).is_none() {
                order.push(definition.name);
            }
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn dispatch(&self, context: &mut ShellContext, name: &str, args: &[&str]) -> CommandResult {
        let key = name.to_ascii_lowercase();
        let entry = self
            .get(&key)
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?;
        tracing::info!(command = entry.name, args = args.len(), "dispatching command");
        (entry.handler)(context, args)
    }
}
