use std::fmt;
use std::path::Path;

use tracing::debug;

use super::error::EvaluateError;
use super::part::Part;
use super::ruleset::RuleSet;

/// A compiled rule set together with the parts listed in the same input.
#[derive(Debug)]
pub struct System {
    ruleset: RuleSet,
    parts: Vec<Part>,
}

impl System {
    /// Parse and compile a full input: workflows, a blank line, then parts.
    ///
    /// # Errors
    ///
    /// Returns [`PartflowError`](crate::PartflowError) on parse or compile failure.
    pub fn from_text(input: &str) -> Result<Self, crate::PartflowError> {
        let parsed = crate::parse::parse(input)?;
        let ruleset = crate::compile::compile(&parsed.workflows)?;
        debug!(
            workflows = parsed.workflows.len(),
            parts = parsed.parts.len(),
            "loaded system"
        );
        Ok(Self {
            ruleset,
            parts: parsed.parts,
        })
    }

    /// Read a file and load it with [`from_text()`](Self::from_text).
    ///
    /// # Errors
    ///
    /// Returns [`PartflowError`](crate::PartflowError) on I/O, parse, or compile failure.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, crate::PartflowError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_text(&input)
    }

    #[must_use]
    pub fn ruleset(&self) -> &RuleSet {
        &self.ruleset
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Sum of the ratings of every accepted part.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError`] if any part cannot be routed.
    pub fn total_accepted(&self) -> Result<u64, EvaluateError> {
        self.ruleset.total_accepted(&self.parts)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "System({}, {} parts)", self.ruleset, self.parts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartflowError;

    const INPUT: &str = "in{x>10:A,R}\n\n{x=11,m=1,a=1,s=1}\n{x=5,m=1,a=1,s=1}\n";

    #[test]
    fn from_text_keeps_parts() {
        let system = System::from_text(INPUT).unwrap();
        assert_eq!(system.parts().len(), 2);
        assert_eq!(system.parts()[0], Part::new(11, 1, 1, 1));
        assert_eq!(system.ruleset().workflow_names(), vec!["in"]);
    }

    #[test]
    fn total_accepted() {
        let system = System::from_text(INPUT).unwrap();
        assert_eq!(system.total_accepted().unwrap(), 14);
    }

    #[test]
    fn from_text_propagates_compile_error() {
        let result = System::from_text("px{A}\n\n{x=1}\n");
        assert!(matches!(result, Err(PartflowError::Compile(_))));
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let result = System::from_file("/nonexistent/partflow/input.txt");
        assert!(matches!(result, Err(PartflowError::Io(_))));
    }

    #[test]
    fn display() {
        let system = System::from_text(INPUT).unwrap();
        assert_eq!(
            system.to_string(),
            "System(RuleSet(1 workflows, 2 rules), 2 parts)"
        );
    }
}
