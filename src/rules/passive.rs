use crate::annotator::Annotation;

use super::{Rule, RuleId};

/// Rule 2: sentences must use the active voice.
///
/// A sentence is passive when a past participle (`VBN`) governs a passive
/// auxiliary ("is", "are", "was"...) attached via the `auxpass` relation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveVoiceRule;

impl Rule for PassiveVoiceRule {
    fn id(&self) -> RuleId {
        RuleId::ActiveVoice
    }

    fn is_violated(&self, annotation: &Annotation) -> bool {
        annotation.tokens().iter().enumerate().any(|(i, token)| {
            token.tag == "VBN" && annotation.children(i).any(|child| child.dep == "auxpass")
        })
    }
}

#[cfg(test)]
#[path = "passive_tests.rs"]
mod tests;
