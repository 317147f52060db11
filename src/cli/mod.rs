pub mod commands;
pub mod input;
pub mod output;
pub mod registry;
pub mod shell_context;

use std::env;

use chrono::NaiveDate;

use finbti_config::ConfigManager;
use finbti_core::{Clock, FixedClock, SystemClock};

use crate::errors::CliError;

use self::shell_context::{OutputMode, ShellContext};

const TODAY_FLAG: &str = "--today";
const JSON_FLAG: &str = "--json";
const PLAIN_FLAG: &str = "--plain";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Command line split into global flags and the command itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Option<String>,
    pub args: Vec<String>,
    pub today: Option<NaiveDate>,
    pub mode: OutputMode,
    pub plain: bool,
}

/// Pulls global flags out of `args` wherever they appear.
pub fn parse_invocation(args: &[String]) -> Result<Invocation, CliError> {
    let mut rest = Vec::new();
    let mut today = None;
    let mut mode = OutputMode::Text;
    let mut plain = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            TODAY_FLAG => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("{TODAY_FLAG} YYYY-MM-DD")))?;
                today = Some(parse_today(value)?);
            }
            JSON_FLAG => mode = OutputMode::Json,
            PLAIN_FLAG => plain = true,
            other => match other.strip_prefix("--today=") {
                Some(value) => today = Some(parse_today(value)?),
                None => rest.push(arg.clone()),
            },
        }
    }

    let mut rest = rest.into_iter();
    Ok(Invocation {
        command: rest.next(),
        args: rest.collect(),
        today,
        mode,
        plain,
    })
}

fn parse_today(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| CliError::Usage(format!("{TODAY_FLAG} expects YYYY-MM-DD, got `{value}`")))
}

/// Runs one command against the configuration stored by `manager` and returns
/// the rendered output.
pub fn run_with_args(args: &[String], manager: ConfigManager) -> Result<String, CliError> {
    let invocation = parse_invocation(args)?;
    let config = manager.load()?;
    let clock: Box<dyn Clock> = match invocation.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let mut context = ShellContext::new(manager, config, clock)
        .with_mode(invocation.mode)
        .with_plain(invocation.plain);

    let registry = commands::registry();
    let command = invocation.command.as_deref().unwrap_or("help");
    let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
    registry.dispatch(&mut context, command, &args)
}

/// Entry point of the `finbti_cli` binary.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let manager = ConfigManager::from_env()?;
    let output = run_with_args(&args, manager)?;
    print!("{output}");
    Ok(())
}
