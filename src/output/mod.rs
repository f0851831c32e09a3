mod json;
mod markdown;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use progress::CheckProgress;
pub use text::{ColorMode, TextFormatter};

use crate::checker::CheckResult;
use crate::error::Result;

/// One checked document: where it came from plus its per-sentence
/// verdicts, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// Display name of the input (`<stdin>` or the file path).
    pub source: String,
    pub results: Vec<CheckResult>,
}

impl DocumentReport {
    #[must_use]
    pub fn new(source: impl Into<String>, results: Vec<CheckResult>) -> Self {
        Self {
            source: source.into(),
            results,
        }
    }

    /// Number of sentences with at least one violation.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_clean()).count()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.results.iter().all(CheckResult::is_clean)
    }
}

/// Trait for formatting check reports into various output formats.
pub trait OutputFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[DocumentReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
