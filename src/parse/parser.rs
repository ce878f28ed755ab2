use crate::{Part, Workflow};

/// The result of parsing an input string: workflow definitions in file order,
/// followed by the parts to route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSystem {
    pub workflows: Vec<Workflow>,
    pub parts: Vec<Part>,
}
