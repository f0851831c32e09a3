use crate::rules::{RULE_COUNT, RuleId};

/// Violation flags for one sentence, one slot per rule in report order.
///
/// The vector always carries all five slots. A rule that could not run
/// (the oracle-backed rule when no oracle is configured) leaves its slot
/// `false`, so downstream consumers never see a variable-length vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Violations {
    flags: [bool; RULE_COUNT],
}

impl Violations {
    /// No rule violated.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            flags: [false; RULE_COUNT],
        }
    }

    /// Build from a raw flag array in [`RuleId::ALL`] order.
    #[must_use]
    pub const fn from_flags(flags: [bool; RULE_COUNT]) -> Self {
        Self { flags }
    }

    pub const fn set(&mut self, rule: RuleId, violated: bool) {
        self.flags[rule.index()] = violated;
    }

    #[must_use]
    pub const fn is_violated(&self, rule: RuleId) -> bool {
        self.flags[rule.index()]
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.flags.iter().any(|&flag| flag)
    }

    /// Number of violated rules.
    #[must_use]
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&flag| flag).count()
    }

    #[must_use]
    pub const fn flags(&self) -> &[bool; RULE_COUNT] {
        &self.flags
    }

    /// The violated rules in report order.
    pub fn violated_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        RuleId::ALL
            .into_iter()
            .filter(|rule| self.flags[rule.index()])
    }
}

/// Verdict for a single sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    sentence: String,
    violations: Violations,
}

impl CheckResult {
    #[must_use]
    pub const fn new(sentence: String, violations: Violations) -> Self {
        Self {
            sentence,
            violations,
        }
    }

    #[must_use]
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    #[must_use]
    pub const fn violations(&self) -> Violations {
        self.violations
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_clean()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
