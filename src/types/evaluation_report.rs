use std::fmt;
use std::time::Duration;

use super::verdict::Verdict;

/// Detailed evaluation report returned by
/// [`RuleSet::evaluate_detailed()`](super::ruleset::RuleSet::evaluate_detailed).
///
/// Contains the verdict, the workflows the part passed through in order
/// (starting with the entry workflow), and the wall-clock duration of the walk.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    verdict: Verdict,
    path: Vec<String>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(verdict: Verdict, path: Vec<String>, duration: Duration) -> Self {
        Self {
            verdict,
            path,
            duration,
        }
    }

    /// The evaluation verdict, same as [`RuleSet::evaluate()`](super::ruleset::RuleSet::evaluate).
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Names of the visited workflows, in visiting order.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verdict: {}", self.verdict)?;
        write!(f, ", path: [{}]", self.path.join(" -> "))?;
        write!(f, ", duration: {:?}", self.duration)?;
        Ok(())
    }
}
