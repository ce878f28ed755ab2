mod error;
mod evaluation_report;
mod expr;
mod part;
mod part_range;
mod rule;
mod ruleset;
mod system;
mod verdict;

pub use error::{CompileError, EvaluateError};
pub use evaluation_report::EvaluationReport;
pub use expr::{CompareOp, Condition, FieldExpr, field};
pub(crate) use expr::CompiledCondition;
pub use part::{Category, Part};
pub use part_range::PartRange;
pub use rule::{ACCEPT_LABEL, ENTRY_WORKFLOW, REJECT_LABEL, Rule, Target, Workflow};
pub(crate) use rule::{CompiledRule, CompiledTarget, CompiledWorkflow};
pub use ruleset::{RuleSet, RuleSetBuilder, WorkflowBuilder};
pub use system::System;
pub use verdict::Verdict;
