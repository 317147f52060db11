use finbti_core::{
    expand_two_digit_year, format_amount_input, format_date_input, mask_account_number,
    parse_amount_to_number,
};

use crate::cli::registry::{CommandEntry, CommandResult};
use crate::cli::shell_context::ShellContext;
use crate::errors::CliError;

const FORMAT_USAGE: &str = "format <date|amount|parse|account|year> <value>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "format",
        "Apply an input formatter to a raw value",
        FORMAT_USAGE,
        cmd_format,
    )]
}

fn cmd_format(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [kind, value, ..] = args else {
        return Err(CliError::Usage(FORMAT_USAGE.to_string()));
    };
    let formatted = match kind.to_ascii_lowercase().as_str() {
        "date" => format_date_input(value),
        "amount" => format_amount_input(value),
        "parse" => parse_amount_to_number(value).to_string(),
        "account" => mask_account_number(value),
        "year" => expand_two_digit_year(value),
        _ => return Err(CliError::Usage(FORMAT_USAGE.to_string())),
    };
    Ok(format!("{formatted}\n"))
}
