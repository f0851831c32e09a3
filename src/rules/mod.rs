mod determiners;
mod imperative;
mod instructions;
mod length;
mod passive;

pub use determiners::DeterminerRule;
pub use imperative::ImperativeRule;
pub use instructions::InstructionRule;
pub use length::{DEFAULT_MAX_WORDS, LengthRule};
pub use passive::PassiveVoiceRule;

use crate::annotator::Annotation;

/// Number of writing rules. Violation vectors always carry one slot per
/// rule, in [`RuleId::ALL`] order, whether or not a rule could run.
pub const RULE_COUNT: usize = 5;

/// Identity of a writing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    /// Rule 1: noun phrases open with an article or demonstrative.
    Determiners,
    /// Rule 2: sentences use the active voice.
    ActiveVoice,
    /// Rule 3: one instruction per sentence.
    SingleInstruction,
    /// Rule 4: instructions use the imperative form.
    Imperative,
    /// Rule 5: sentences stay under the word limit.
    Length,
}

impl RuleId {
    /// All rules in report order.
    pub const ALL: [Self; RULE_COUNT] = [
        Self::Determiners,
        Self::ActiveVoice,
        Self::SingleInstruction,
        Self::Imperative,
        Self::Length,
    ];

    /// Position of this rule in a violation vector.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Determiners => 0,
            Self::ActiveVoice => 1,
            Self::SingleInstruction => 2,
            Self::Imperative => 3,
            Self::Length => 4,
        }
    }

    /// One-based rule number used as a footnote marker in reports.
    #[must_use]
    pub const fn footnote(self) -> usize {
        self.index() + 1
    }

    /// Short imperative phrasing of what the rule asks for.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Determiners => "Use an article or demonstrative before nouns",
            Self::ActiveVoice => "Use the active voice",
            Self::SingleInstruction => "Write one instruction per sentence",
            Self::Imperative => "Use the imperative form",
            Self::Length => "Write short sentences",
        }
    }
}

/// A single writing rule applied to one annotated sentence.
pub trait Rule {
    fn id(&self) -> RuleId;

    /// Check one sentence. Returns `true` when the sentence violates the
    /// rule.
    fn is_violated(&self, annotation: &Annotation) -> bool;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
