use crate::annotator::Annotation;

use super::{Rule, RuleId};

/// Default word limit per sentence.
pub const DEFAULT_MAX_WORDS: usize = 20;

/// Rule 5: sentences must stay at or under the word limit.
///
/// Punctuation and whitespace tokens do not count as words.
#[derive(Debug, Clone, Copy)]
pub struct LengthRule {
    max_words: usize,
}

impl LengthRule {
    #[must_use]
    pub const fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS)
    }
}

impl Rule for LengthRule {
    fn id(&self) -> RuleId {
        RuleId::Length
    }

    fn is_violated(&self, annotation: &Annotation) -> bool {
        annotation.word_count() > self.max_words
    }
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;
