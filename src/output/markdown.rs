use std::fmt::Write;

use crate::error::Result;
use crate::rules::RuleId;

use super::{DocumentReport, OutputFormatter};

/// Renders each document as annotated Markdown: the running text with
/// violated sentences marked by superscript rule numbers, followed by a
/// legend of the rules that fired.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn annotated_body(report: &DocumentReport) -> String {
        let mut body = String::new();
        for (i, result) in report.results.iter().enumerate() {
            if i > 0 {
                body.push(' ');
            }
            body.push_str(result.sentence());
            if !result.is_clean() {
                let footnotes = result
                    .violations()
                    .violated_rules()
                    .map(|rule| rule.footnote().to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(body, "<sup>{footnotes}</sup>").ok();
            }
        }
        body
    }

    /// Rules violated anywhere in the document, in rule order.
    fn legend(report: &DocumentReport) -> Vec<RuleId> {
        RuleId::ALL
            .into_iter()
            .filter(|rule| {
                report
                    .results
                    .iter()
                    .any(|r| r.violations().is_violated(*rule))
            })
            .collect()
    }

    fn format_report(report: &DocumentReport, output: &mut String) {
        if report.results.is_empty() {
            writeln!(output, "No violations.").ok();
            return;
        }

        writeln!(output, "{}", Self::annotated_body(report)).ok();
        writeln!(output).ok();
        if report.is_clean() {
            writeln!(output, "No violations.").ok();
        } else {
            writeln!(output, "**Violated rules:**").ok();
            writeln!(output).ok();
            for rule in Self::legend(report) {
                writeln!(output, "{}. {}", rule.footnote(), rule.description()).ok();
            }
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, reports: &[DocumentReport]) -> Result<String> {
        let mut output = String::new();
        let multiple = reports.len() > 1;

        for (i, report) in reports.iter().enumerate() {
            if multiple {
                if i > 0 {
                    writeln!(output).ok();
                }
                writeln!(output, "## {}", report.source).ok();
                writeln!(output).ok();
            }
            Self::format_report(report, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
