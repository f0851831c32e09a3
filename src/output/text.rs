use std::io::Write as IoWrite;

use crate::checker::CheckResult;
use crate::error::Result;

use super::{DocumentReport, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        let use_colors = Self::should_use_colors(mode);
        Self {
            use_colors,
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                // Check if stdout is a TTY
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_sentence(
        &self,
        source: &str,
        number: usize,
        result: &CheckResult,
        output: &mut Vec<u8>,
    ) {
        if result.is_clean() {
            let status = self.colorize("✓", ansi::GREEN);
            writeln!(output, "{status} {source}:{number}: {:?}", result.sentence()).ok();
            return;
        }

        let status = self.colorize("✗", ansi::RED);
        writeln!(output, "{status} {source}:{number}: {:?}", result.sentence()).ok();
        for rule in result.violations().violated_rules() {
            writeln!(output, "   [{}] {}", rule.footnote(), rule.description()).ok();
        }
    }

    fn format_summary(&self, documents: usize, sentences: usize, violations: usize) -> String {
        let violations_str = if violations > 0 {
            self.colorize(&violations.to_string(), ansi::RED)
        } else {
            self.colorize(&violations.to_string(), ansi::GREEN)
        };
        format!(
            "Summary: {documents} documents checked, {sentences} sentences, {violations_str} with violations"
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[DocumentReport]) -> Result<String> {
        let mut output = Vec::new();

        for report in reports {
            for (i, result) in report.results.iter().enumerate() {
                // Clean sentences only clutter the default report.
                if result.is_clean() && self.verbose < 1 {
                    continue;
                }
                self.format_sentence(&report.source, i + 1, result, &mut output);
            }
        }

        let sentences = reports.iter().map(|r| r.results.len()).sum();
        let violations = reports.iter().map(DocumentReport::violation_count).sum();
        let summary = self.format_summary(reports.len(), sentences, violations);
        writeln!(output, "{summary}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
