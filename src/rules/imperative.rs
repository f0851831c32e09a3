use crate::annotator::Annotation;

use super::{Rule, RuleId};

/// Rule 4: instructions must use the imperative form.
///
/// The main verb has to be a bare infinitive (`VB`) with no expressed
/// subject. Sentences without a verbal root (headings, nominal fragments)
/// are outside the rule's scope and pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImperativeRule;

impl Rule for ImperativeRule {
    fn id(&self) -> RuleId {
        RuleId::Imperative
    }

    fn is_violated(&self, annotation: &Annotation) -> bool {
        let Some((idx, root)) = annotation.root_verb() else {
            return false;
        };
        if root.tag != "VB" {
            return true;
        }
        annotation.children(idx).any(|child| child.dep == "nsubj")
    }
}

#[cfg(test)]
#[path = "imperative_tests.rs"]
mod tests;
