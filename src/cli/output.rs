use colored::Colorize;
use std::fmt;

const GAUGE_WIDTH: usize = 20;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Detail,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

fn build_label(kind: MessageKind) -> Option<&'static str> {
    match kind {
        MessageKind::Warning => Some("WARNING"),
        MessageKind::Error => Some("ERROR"),
        _ => None,
    }
}

/// Formats one line for the given message kind.
pub fn style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Detail => format!("  {text}"),
        _ => match build_label(kind) {
            Some(label) => format!("{label}: {text}"),
            None => text,
        },
    };

    if !prefs.color_enabled {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Detail => formatted.dimmed().to_string(),
        MessageKind::Info => formatted,
    }
}

/// `[#####---------------] 25%`
pub fn gauge(percent: u8) -> String {
    let percent = usize::from(percent.min(100));
    let filled = percent * GAUGE_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled),
        percent
    )
}

/// Collects styled lines for a command's output.
#[derive(Debug, Clone)]
pub struct Report {
    prefs: OutputPreferences,
    lines: Vec<String>,
}

impl Report {
    pub fn new(prefs: OutputPreferences) -> Self {
        Self {
            prefs,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: MessageKind, message: impl fmt::Display) -> &mut Self {
        self.lines.push(style(kind, message, &self.prefs));
        self
    }

    pub fn info(&mut self, message: impl fmt::Display) -> &mut Self {
        self.push(MessageKind::Info, message)
    }

    pub fn detail(&mut self, message: impl fmt::Display) -> &mut Self {
        self.push(MessageKind::Detail, message)
    }

    pub fn success(&mut self, message: impl fmt::Display) -> &mut Self {
        self.push(MessageKind::Success, message)
    }

    pub fn warning(&mut self, message: impl fmt::Display) -> &mut Self {
        self.push(MessageKind::Warning, message)
    }

    pub fn section(&mut self, title: impl fmt::Display) -> &mut Self {
        self.push(MessageKind::Section, title)
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn finish(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences {
        color_enabled: false,
    };

    #[test]
    fn plain_style_adds_labels_only() {
        assert_eq!(style(MessageKind::Section, " Goal ", &PLAIN), "=== Goal ===");
        assert_eq!(style(MessageKind::Warning, "careful", &PLAIN), "WARNING: careful");
        assert_eq!(style(MessageKind::Detail, "row", &PLAIN), "  row");
        assert_eq!(style(MessageKind::Info, "plain", &PLAIN), "plain");
    }

    #[test]
    fn gauge_fills_proportionally() {
        assert_eq!(gauge(0), format!("[{}] 0%", "-".repeat(20)));
        assert_eq!(gauge(25), format!("[#####{}] 25%", "-".repeat(15)));
        assert_eq!(gauge(100), format!("[{}] 100%", "#".repeat(20)));
    }

    #[test]
    fn report_joins_lines() {
        let mut report = Report::new(PLAIN);
        report.section("Title").info("body").blank_line();
        assert_eq!(report.finish(), "=== Title ===\nbody\n\n");
    }
}
