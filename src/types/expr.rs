use std::fmt;

use super::part::{Category, Part};

/// Comparison operators supported in rule conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Gt,
    Lt,
}

impl CompareOp {
    /// Apply the operator as `rating <op> threshold`.
    #[must_use]
    pub fn apply(self, rating: u32, threshold: u32) -> bool {
        match self {
            CompareOp::Gt => rating > threshold,
            CompareOp::Lt => rating < threshold,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Lt => write!(f, "<"),
        }
    }
}

/// User-facing rule condition. The field is still a string here;
/// it is resolved to a [`Category`] during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub op: CompareOp,
    pub threshold: u32,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op, self.threshold)
    }
}

/// Condition with the field resolved to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CompiledCondition {
    pub(crate) category: Category,
    pub(crate) op: CompareOp,
    pub(crate) threshold: u32,
}

impl CompiledCondition {
    pub(crate) fn matches(&self, part: &Part) -> bool {
        self.op.apply(part.get(self.category), self.threshold)
    }
}

/// Intermediate builder for field conditions.
/// Created by [`field()`]; requires a comparison method to produce a [`Condition`].
#[derive(Debug, Clone)]
pub struct FieldExpr {
    name: String,
}

impl FieldExpr {
    #[must_use]
    pub fn gt(self, threshold: u32) -> Condition {
        Condition {
            field: self.name,
            op: CompareOp::Gt,
            threshold,
        }
    }

    #[must_use]
    pub fn lt(self, threshold: u32) -> Condition {
        Condition {
            field: self.name,
            op: CompareOp::Lt,
            threshold,
        }
    }
}

#[must_use]
pub fn field(name: &str) -> FieldExpr {
    FieldExpr {
        name: name.to_owned(),
    }
}
