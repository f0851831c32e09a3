use crate::annotator::Annotation;
use crate::oracle::{OracleAnswer, SimultaneityOracle};

use super::{Rule, RuleId};

/// Phrases that mark actions as intentionally simultaneous. A sentence
/// containing one is a single (compound) instruction by declaration.
const SIMULTANEITY_KEYWORDS: [&str; 5] = [
    "at the same time",
    "simultaneously",
    "while",
    "concurrently",
    "in parallel",
];

/// Coordinating words that suggest a sentence chains several actions.
const COORDINATING_WORDS: [&str; 3] = ["and", "or", "then"];

/// Rule 3: one instruction per sentence.
///
/// Sentences chaining several actions are allowed only when those actions
/// genuinely happen at the same time ("Hold the button while turning the
/// key"). Explicit simultaneity keywords settle that locally; otherwise a
/// language-model oracle is asked. When the oracle cannot answer, the
/// sentence is flagged rather than silently passed.
pub struct InstructionRule {
    oracle: Box<dyn SimultaneityOracle>,
}

impl InstructionRule {
    #[must_use]
    pub fn new(oracle: Box<dyn SimultaneityOracle>) -> Self {
        Self { oracle }
    }

    fn mentions_simultaneity(text: &str) -> bool {
        let lower = text.to_lowercase();
        SIMULTANEITY_KEYWORDS
            .iter()
            .any(|keyword| lower.contains(keyword))
    }

    fn has_multiple_actions(annotation: &Annotation) -> bool {
        annotation.root_verb_count() > 1
            || annotation
                .tokens()
                .iter()
                .any(|token| COORDINATING_WORDS.contains(&token.text.to_lowercase().as_str()))
    }
}

impl Rule for InstructionRule {
    fn id(&self) -> RuleId {
        RuleId::SingleInstruction
    }

    fn is_violated(&self, annotation: &Annotation) -> bool {
        if Self::mentions_simultaneity(annotation.text()) {
            return false;
        }
        if !Self::has_multiple_actions(annotation) {
            return false;
        }
        match self.oracle.actions_simultaneous(annotation.text()) {
            Ok(OracleAnswer::Yes) => false,
            Ok(OracleAnswer::No) => true,
            Err(e) => {
                log::warn!(
                    "simultaneity oracle failed on {:?}: {e}; flagging as multiple instructions",
                    annotation.text()
                );
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "instructions_tests.rs"]
mod tests;
