use chrono::NaiveDate;

use finbti_config::{Config, ConfigManager};
use finbti_core::{
    currency_formatter, Clock, CurrencyFormatter, GroupingOptions, LabelLocale,
};

use super::output::{OutputPreferences, Report};

/// How command results are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// State shared by every command handler for one invocation.
pub struct ShellContext {
    pub config: Config,
    pub config_manager: ConfigManager,
    pub clock: Box<dyn Clock>,
    pub mode: OutputMode,
    /// Colour off for this run only; never written back to `config`.
    pub plain: bool,
}

impl ShellContext {
    pub fn new(config_manager: ConfigManager, config: Config, clock: Box<dyn Clock>) -> Self {
        Self {
            config,
            config_manager,
            clock,
            mode: OutputMode::Text,
            plain: false,
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn locale(&self) -> LabelLocale {
        LabelLocale::from_tag(&self.config.locale)
    }

    pub fn grouping_options(&self) -> GroupingOptions {
        GroupingOptions {
            key: self.config.ledger_grouping,
            locale: self.locale(),
            currency: self.config.currency.clone(),
        }
    }

    pub fn formatter(&self) -> Box<dyn CurrencyFormatter> {
        currency_formatter(&self.config.currency)
    }

    pub fn preferences(&self) -> OutputPreferences {
        OutputPreferences {
            color_enabled: self.config.ui_color_enabled && !self.plain,
        }
    }

    pub fn report(&self) -> Report {
        Report::new(self.preferences())
    }
}
