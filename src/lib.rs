mod analyze;
mod compile;
mod error;
mod evaluate;
pub mod parse;
mod types;

pub use error::PartflowError;
pub use types::{
    ACCEPT_LABEL, Category, CompareOp, CompileError, Condition, ENTRY_WORKFLOW, EvaluateError,
    EvaluationReport, FieldExpr, Part, PartRange, REJECT_LABEL, Rule, RuleSet, RuleSetBuilder,
    System, Target, Verdict, Workflow, WorkflowBuilder, field,
};

/// Load the input file at `path` and return the sum of the ratings of all
/// accepted parts, rendered as a decimal string.
///
/// # Errors
///
/// Returns [`PartflowError`] on I/O, parse, compile, or evaluation failure.
pub fn solve(path: impl AsRef<std::path::Path>) -> Result<String, PartflowError> {
    let system = System::from_file(path)?;
    Ok(system.total_accepted()?.to_string())
}
