use std::fmt;

use super::expr::{CompiledCondition, Condition};
use super::part::Part;

/// Label of the terminal target that accepts a part.
pub const ACCEPT_LABEL: &str = "A";

/// Label of the terminal target that rejects a part.
pub const REJECT_LABEL: &str = "R";

/// Name of the workflow every evaluation starts in.
pub const ENTRY_WORKFLOW: &str = "in";

/// Where a rule sends a part when it fires.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Accept,
    Reject,
    Workflow(String),
}

impl Target {
    /// Interpret a text label: `A` and `R` are terminal, anything else names a workflow.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            ACCEPT_LABEL => Target::Accept,
            REJECT_LABEL => Target::Reject,
            name => Target::Workflow(name.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Target::Accept => ACCEPT_LABEL,
            Target::Reject => REJECT_LABEL,
            Target::Workflow(name) => name.as_str(),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Target::Workflow(_))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One routing decision inside a workflow.
///
/// A rule without a condition is unconditional and always fires; every
/// workflow must end with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub condition: Option<Condition>,
    pub target: Target,
}

impl Rule {
    #[must_use]
    pub fn when(condition: Condition, target: Target) -> Self {
        Self {
            condition: Some(condition),
            target,
        }
    }

    #[must_use]
    pub fn fallback(target: Target) -> Self {
        Self {
            condition: None,
            target,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.condition {
            Some(condition) => write!(f, "{condition}:{}", self.target),
            None => write!(f, "{}", self.target),
        }
    }
}

/// A named, ordered list of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    pub name: String,
    pub rules: Vec<Rule>,
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.name)?;
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{rule}")?;
        }
        f.write_str("}")
    }
}

/// Target with workflow names resolved to indices into the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompiledTarget {
    Accept,
    Reject,
    Workflow(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledRule {
    pub(crate) condition: Option<CompiledCondition>,
    pub(crate) target: CompiledTarget,
}

impl CompiledRule {
    pub(crate) fn matches(&self, part: &Part) -> bool {
        self.condition.as_ref().is_none_or(|c| c.matches(part))
    }
}

/// A workflow whose rules have been validated and resolved.
///
/// The last rule is always unconditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledWorkflow {
    pub(crate) name: String,
    pub(crate) rules: Vec<CompiledRule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[test]
    fn target_from_label() {
        assert_eq!(Target::from_label("A"), Target::Accept);
        assert_eq!(Target::from_label("R"), Target::Reject);
        assert_eq!(Target::from_label("qkq"), Target::Workflow("qkq".into()));
    }

    #[test]
    fn terminal_labels_are_case_sensitive() {
        assert_eq!(Target::from_label("a"), Target::Workflow("a".into()));
        assert_eq!(Target::from_label("r"), Target::Workflow("r".into()));
    }

    #[test]
    fn target_is_terminal() {
        assert!(Target::Accept.is_terminal());
        assert!(Target::Reject.is_terminal());
        assert!(!Target::Workflow("in".into()).is_terminal());
    }

    #[test]
    fn rule_display() {
        let rule = Rule::when(field("a").lt(2006), Target::from_label("qkq"));
        assert_eq!(rule.to_string(), "a<2006:qkq");
        assert_eq!(Rule::fallback(Target::Reject).to_string(), "R");
    }

    #[test]
    fn workflow_display() {
        let workflow = Workflow {
            name: "px".into(),
            rules: vec![
                Rule::when(field("a").lt(2006), Target::from_label("qkq")),
                Rule::when(field("m").gt(2090), Target::Accept),
                Rule::fallback(Target::from_label("rfg")),
            ],
        };
        assert_eq!(workflow.to_string(), "px{a<2006:qkq,m>2090:A,rfg}");
    }
}
