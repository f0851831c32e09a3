use serde_json::Value;

use crate::checker::{CheckResult, Violations};

use super::*;

fn clean(sentence: &str) -> CheckResult {
    CheckResult::new(sentence.to_string(), Violations::none())
}

fn flagged(sentence: &str, flags: [bool; 5]) -> CheckResult {
    CheckResult::new(sentence.to_string(), Violations::from_flags(flags))
}

fn parse(reports: &[DocumentReport]) -> Value {
    let output = JsonFormatter.format(reports).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn output_is_valid_json_with_summary() {
    let reports = vec![DocumentReport::new(
        "manual.txt",
        vec![
            clean("Turn the knob."),
            flagged("Turn shaft assembly.", [true, false, false, false, true]),
        ],
    )];
    let value = parse(&reports);

    assert_eq!(value["summary"]["total_documents"], 1);
    assert_eq!(value["summary"]["total_sentences"], 2);
    assert_eq!(value["summary"]["sentences_with_violations"], 1);
}

#[test]
fn sentences_carry_flags_and_footnotes() {
    let reports = vec![DocumentReport::new(
        "manual.txt",
        vec![flagged(
            "Turn shaft assembly.",
            [true, false, false, false, true],
        )],
    )];
    let value = parse(&reports);

    let sentence = &value["documents"][0]["sentences"][0];
    assert_eq!(sentence["text"], "Turn shaft assembly.");
    assert_eq!(
        sentence["violations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_bool().unwrap())
            .collect::<Vec<_>>(),
        vec![true, false, false, false, true]
    );
    assert_eq!(
        sentence["violated_rules"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect::<Vec<_>>(),
        vec![1, 5]
    );
}

#[test]
fn clean_sentence_has_empty_violated_rules() {
    let reports = vec![DocumentReport::new(
        "manual.txt",
        vec![clean("Turn the knob.")],
    )];
    let value = parse(&reports);

    let sentence = &value["documents"][0]["sentences"][0];
    assert!(sentence["violated_rules"].as_array().unwrap().is_empty());
}

#[test]
fn document_source_is_preserved() {
    let reports = vec![
        DocumentReport::new("manual.txt", vec![clean("Turn the knob.")]),
        DocumentReport::new("<stdin>", vec![clean("Press the button.")]),
    ];
    let value = parse(&reports);

    assert_eq!(value["documents"][0]["source"], "manual.txt");
    assert_eq!(value["documents"][1]["source"], "<stdin>");
}

#[test]
fn empty_reports_produce_empty_documents_array() {
    let value = parse(&[]);

    assert!(value["documents"].as_array().unwrap().is_empty());
    assert_eq!(value["summary"]["total_documents"], 0);
    assert_eq!(value["summary"]["total_sentences"], 0);
}

#[test]
fn output_is_pretty_printed() {
    let reports = vec![DocumentReport::new(
        "manual.txt",
        vec![clean("Turn the knob.")],
    )];
    let output = JsonFormatter.format(&reports).unwrap();

    assert!(output.contains('\n'));
    assert!(output.contains("  "));
}
