use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;
use crate::rules::RuleId;

use super::{DocumentReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    documents: Vec<DocumentResult>,
}

#[derive(Serialize)]
struct Summary {
    total_documents: usize,
    total_sentences: usize,
    sentences_with_violations: usize,
}

#[derive(Serialize)]
struct DocumentResult {
    source: String,
    sentences: Vec<SentenceResult>,
}

#[derive(Serialize)]
struct SentenceResult {
    text: String,
    /// One flag per rule, in rule order.
    violations: Vec<bool>,
    /// One-based numbers of the violated rules.
    violated_rules: Vec<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[DocumentReport]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_documents: reports.len(),
                total_sentences: reports.iter().map(|r| r.results.len()).sum(),
                sentences_with_violations: reports
                    .iter()
                    .map(DocumentReport::violation_count)
                    .sum(),
            },
            documents: reports
                .iter()
                .map(|report| DocumentResult {
                    source: report.source.clone(),
                    sentences: report.results.iter().map(convert_result).collect(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> SentenceResult {
    SentenceResult {
        text: result.sentence().to_string(),
        violations: result.violations().flags().to_vec(),
        violated_rules: result
            .violations()
            .violated_rules()
            .map(RuleId::footnote)
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
