use crate::annotator::{Annotation, NounChunk, Token};

use super::{Rule, RuleId};

/// Words accepted at the head of a noun phrase: the articles plus the
/// singular and plural demonstratives.
const ALLOWED_DETERMINERS: [&str; 7] = ["a", "an", "the", "this", "these", "that", "those"];

/// Rule 1: every noun phrase must open with an article or demonstrative.
///
/// Bare noun phrases ("Turn shaft assembly") are a hallmark of telegraphic
/// manual style and are harder to parse for non-native readers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterminerRule;

impl DeterminerRule {
    /// The token that opens the phrase. Normally the first token of the
    /// chunk; when the chunk's own root is a determiner, the word it
    /// modifies is inspected instead.
    fn chunk_leader<'a>(annotation: &'a Annotation, chunk: &NounChunk) -> &'a Token {
        let tokens = annotation.tokens();
        let root = &tokens[chunk.root];
        if root.dep == "det" {
            &tokens[root.head]
        } else {
            &tokens[chunk.start]
        }
    }
}

impl Rule for DeterminerRule {
    fn id(&self) -> RuleId {
        RuleId::Determiners
    }

    fn is_violated(&self, annotation: &Annotation) -> bool {
        annotation.noun_chunks().iter().any(|chunk| {
            let leader = Self::chunk_leader(annotation, chunk);
            !ALLOWED_DETERMINERS.contains(&leader.text.to_lowercase().as_str())
        })
    }
}

#[cfg(test)]
#[path = "determiners_tests.rs"]
mod tests;
