use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("duplicate workflow name '{name}'")]
    DuplicateWorkflow { name: String },

    #[error("workflow name '{name}' is reserved for a terminal target")]
    ReservedName { name: String },

    #[error("entry workflow '{entry}' is not defined")]
    MissingEntry { entry: String },

    #[error("workflow '{workflow}' has no rules")]
    EmptyWorkflow { workflow: String },

    #[error("workflow '{workflow}' does not end with an unconditional rule")]
    MissingFallback { workflow: String },

    #[error("workflow '{workflow}' has rules after the unconditional rule at position {position}")]
    UnreachableRules { workflow: String, position: usize },

    /// A condition names a field other than `x`, `m`, `a` or `s`. Such a rule
    /// is rejected outright rather than treated as one that never fires.
    #[error("undefined field '{field}' in workflow '{workflow}'")]
    UndefinedField { workflow: String, field: String },

    #[error("undefined target '{target}' in workflow '{workflow}'")]
    UndefinedTarget { workflow: String, target: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluateError {
    #[error("workflow cycle detected: {}", path.join(" -> "))]
    Cycle { path: Vec<String> },

    #[error("no rule in workflow '{workflow}' matched")]
    NoMatchingRule { workflow: String },
}
