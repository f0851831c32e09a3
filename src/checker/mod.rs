mod result;

pub use result::{CheckResult, Violations};

use std::sync::Arc;

use crate::annotator::{Annotation, Annotator};
use crate::error::Result;
use crate::oracle::SimultaneityOracle;
use crate::rules::{
    DeterminerRule, ImperativeRule, InstructionRule, LengthRule, PassiveVoiceRule, Rule,
};
use crate::segmenter::SentenceSegmenter;

/// Applies the five writing rules to every sentence of a document.
///
/// Each sentence is parsed exactly once; all rules share that parse.
pub struct RuleChecker {
    annotator: Arc<dyn Annotator>,
    segmenter: SentenceSegmenter,
    determiners: DeterminerRule,
    passive: PassiveVoiceRule,
    instructions: Option<InstructionRule>,
    imperative: ImperativeRule,
    length: LengthRule,
}

impl RuleChecker {
    /// Build a checker without an oracle. The single-instruction rule is
    /// skipped and its violation slot stays `false`.
    #[must_use]
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(Arc::clone(&annotator)),
            annotator,
            determiners: DeterminerRule,
            passive: PassiveVoiceRule,
            instructions: None,
            imperative: ImperativeRule,
            length: LengthRule::default(),
        }
    }

    /// Enable the single-instruction rule, backed by `oracle`.
    #[must_use]
    pub fn with_oracle(mut self, oracle: Box<dyn SimultaneityOracle>) -> Self {
        self.instructions = Some(InstructionRule::new(oracle));
        self
    }

    /// Override the word limit of the length rule.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.length = LengthRule::new(max_words);
        self
    }

    #[must_use]
    pub const fn has_oracle(&self) -> bool {
        self.instructions.is_some()
    }

    /// Check a whole document: segment it, parse each sentence, apply all
    /// rules. Results keep the input sentence order.
    ///
    /// # Errors
    /// Fails when the annotation service fails. Oracle failures never
    /// surface here; they degrade to a flagged sentence.
    pub fn check(&self, text: &str) -> Result<Vec<CheckResult>> {
        let sentences = self.segmenter.split(text)?;
        let mut results = Vec::with_capacity(sentences.len());
        for sentence in sentences {
            let annotation = self.annotator.annotate(&sentence)?;
            let violations = self.check_sentence(&annotation);
            results.push(CheckResult::new(sentence, violations));
        }
        Ok(results)
    }

    fn check_sentence(&self, annotation: &Annotation) -> Violations {
        let mut violations = Violations::none();
        violations.set(
            self.determiners.id(),
            self.determiners.is_violated(annotation),
        );
        violations.set(self.passive.id(), self.passive.is_violated(annotation));
        if let Some(instructions) = &self.instructions {
            violations.set(instructions.id(), instructions.is_violated(annotation));
        }
        violations.set(
            self.imperative.id(),
            self.imperative.is_violated(annotation),
        );
        violations.set(self.length.id(), self.length.is_violated(annotation));
        violations
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
