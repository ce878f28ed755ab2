use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use super::error::{CompileError, EvaluateError};
use super::evaluation_report::EvaluationReport;
use super::expr::Condition;
use super::part::Part;
use super::part_range::PartRange;
use super::rule::{CompiledTarget, CompiledWorkflow, Rule, Target, Workflow};
use super::verdict::Verdict;

/// Builder for constructing a [`RuleSet`] in code.
///
/// Workflows are defined via closures and compiled into an immutable
/// workflow graph.
///
/// # Example
///
/// ```
/// use partflow::{field, Part, RuleSetBuilder, Verdict};
///
/// let ruleset = RuleSetBuilder::new()
///     .workflow("in", |w| w.when(field("s").lt(1351), "px").otherwise("R"))
///     .workflow("px", |w| w.when(field("m").gt(2090), "A").otherwise("R"))
///     .compile()
///     .unwrap();
///
/// let part = Part::new(0, 3000, 0, 100);
/// assert_eq!(ruleset.evaluate(&part).unwrap(), Verdict::Accepted);
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    workflows: Vec<Workflow>,
}

/// Intermediate builder passed to the workflow definition closure.
#[derive(Debug)]
pub struct WorkflowBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a workflow. The closure adds rules in evaluation order and
    /// should finish with [`WorkflowBuilder::otherwise()`].
    ///
    /// A workflow without a final unconditional rule fails compilation with
    /// [`CompileError::MissingFallback`].
    #[must_use]
    pub fn workflow(
        mut self,
        name: &str,
        f: impl FnOnce(WorkflowBuilder) -> WorkflowBuilder,
    ) -> Self {
        let builder = f(WorkflowBuilder { rules: Vec::new() });
        self.workflows.push(Workflow {
            name: name.to_owned(),
            rules: builder.rules,
        });
        self
    }

    /// Compile the workflows into an immutable `RuleSet`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if validation fails.
    pub fn compile(self) -> Result<RuleSet, CompileError> {
        crate::compile::compile(&self.workflows)
    }
}

impl WorkflowBuilder {
    /// Add a conditional rule jumping to `target` when `condition` holds.
    #[must_use]
    pub fn when(mut self, condition: Condition, target: &str) -> Self {
        self.rules.push(Rule::when(condition, Target::from_label(target)));
        self
    }

    /// Add the unconditional rule that ends the workflow.
    #[must_use]
    pub fn otherwise(mut self, target: &str) -> Self {
        self.rules.push(Rule::fallback(Target::from_label(target)));
        self
    }
}

/// A compiled, immutable workflow graph.
#[derive(Debug)]
pub struct RuleSet {
    pub(crate) workflows: Vec<CompiledWorkflow>,
    pub(crate) workflow_indices: HashMap<String, usize>,
    pub(crate) entry: usize,
}

impl RuleSet {
    /// Route a part from the entry workflow to a terminal target.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::Cycle`] if the part re-enters a workflow it
    /// already passed through.
    pub fn evaluate(&self, part: &Part) -> Result<Verdict, EvaluateError> {
        crate::evaluate::evaluate(&self.workflows, self.entry, part)
    }

    /// Evaluate with diagnostics: the visited workflows and timing.
    ///
    /// # Errors
    ///
    /// Same as [`evaluate()`](Self::evaluate).
    pub fn evaluate_detailed(&self, part: &Part) -> Result<EvaluationReport, EvaluateError> {
        crate::evaluate::evaluate_detailed(&self.workflows, self.entry, part)
    }

    /// Sum the ratings of every accepted part.
    ///
    /// # Errors
    ///
    /// Fails on the first part whose evaluation fails.
    pub fn total_accepted(&self, parts: &[Part]) -> Result<u64, EvaluateError> {
        let mut total = 0;
        let mut accepted = 0_usize;
        for part in parts {
            let verdict = self.evaluate(part)?;
            trace!(%part, %verdict, "evaluated part");
            if verdict.is_accepted() {
                accepted += 1;
                total += part.total();
            }
        }
        debug!(parts = parts.len(), accepted, total, "summed accepted ratings");
        Ok(total)
    }

    /// Count the distinct parts inside `range` that would be accepted.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::Cycle`] if some part in the range would loop.
    pub fn count_accepted(&self, range: PartRange) -> Result<u128, EvaluateError> {
        crate::analyze::count_accepted(&self.workflows, self.entry, range)
    }

    /// Parse workflow text and compile it into a `RuleSet`.
    ///
    /// A parts section, if present, is parsed but not kept; use
    /// [`System::from_text()`](super::System::from_text) to keep it.
    ///
    /// # Errors
    ///
    /// Returns [`PartflowError`](crate::PartflowError) on parse or compile failure.
    pub fn from_dsl(input: &str) -> Result<Self, crate::PartflowError> {
        let parsed = crate::parse::parse(input)?;
        let ruleset = crate::compile::compile(&parsed.workflows)?;
        Ok(ruleset)
    }

    /// Workflow names in definition order.
    #[must_use]
    pub fn workflow_names(&self) -> Vec<&str> {
        self.workflows.iter().map(|w| w.name.as_str()).collect()
    }

    /// Labels a workflow can jump to, in rule order.
    ///
    /// Returns `None` if the workflow is not found.
    #[must_use]
    pub fn targets_of(&self, workflow: &str) -> Option<Vec<&str>> {
        let idx = *self.workflow_indices.get(workflow)?;
        Some(
            self.workflows[idx]
                .rules
                .iter()
                .map(|r| self.target_label(r.target))
                .collect(),
        )
    }

    /// A cycle in the static jump graph, if any, as a path that starts and
    /// ends at the same workflow.
    ///
    /// The static graph ignores conditions, so a reported cycle may be
    /// unreachable for every actual part.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<&str>> {
        crate::analyze::find_cycle(&self.workflows)
            .map(|path| path.into_iter().map(|i| self.workflows[i].name.as_str()).collect())
    }

    fn target_label(&self, target: CompiledTarget) -> &str {
        match target {
            CompiledTarget::Accept => super::rule::ACCEPT_LABEL,
            CompiledTarget::Reject => super::rule::REJECT_LABEL,
            CompiledTarget::Workflow(idx) => self.workflows[idx].name.as_str(),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RuleSet({} workflows, {} rules)",
            self.workflows.len(),
            self.workflows.iter().map(|w| w.rules.len()).sum::<usize>(),
        )
    }
}
