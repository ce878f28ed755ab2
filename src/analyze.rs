use crate::evaluate::cycle_error;
use crate::types::{CompiledTarget, CompiledWorkflow};
use crate::{EvaluateError, PartRange};

pub(crate) fn count_accepted(
    workflows: &[CompiledWorkflow],
    entry: usize,
    range: PartRange,
) -> Result<u128, EvaluateError> {
    let mut stack = Vec::new();
    count_workflow(workflows, entry, range, &mut stack)
}

/// Push `range` through one workflow: each conditional rule peels off the
/// matching sub-range, the remainder falls through to the next rule.
fn count_workflow(
    workflows: &[CompiledWorkflow],
    index: usize,
    mut range: PartRange,
    stack: &mut Vec<usize>,
) -> Result<u128, EvaluateError> {
    // Every part in a non-empty range re-entering a workflow on the current
    // walk follows the same loop forever.
    if stack.contains(&index) {
        return Err(cycle_error(workflows, stack, index));
    }
    stack.push(index);

    let mut total: u128 = 0;
    for rule in &workflows[index].rules {
        if range.is_empty() {
            break;
        }
        let matched = match rule.condition {
            Some(c) => {
                let (matched, rest) = range.split(c.category, c.op, c.threshold);
                range = rest;
                matched
            }
            None => std::mem::replace(&mut range, PartRange::empty()),
        };
        let count = count_target(workflows, rule.target, matched, stack)?;
        total = total.saturating_add(count);
    }

    stack.pop();
    Ok(total)
}

fn count_target(
    workflows: &[CompiledWorkflow],
    target: CompiledTarget,
    range: PartRange,
    stack: &mut Vec<usize>,
) -> Result<u128, EvaluateError> {
    if range.is_empty() {
        return Ok(0);
    }
    match target {
        CompiledTarget::Accept => Ok(range.count()),
        CompiledTarget::Reject => Ok(0),
        CompiledTarget::Workflow(next) => count_workflow(workflows, next, range, stack),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum DfsState {
    Unvisited,
    InStack,
    Done,
}

/// DFS over the static jump graph, ignoring conditions.
pub(crate) fn find_cycle(workflows: &[CompiledWorkflow]) -> Option<Vec<usize>> {
    let mut state = vec![DfsState::Unvisited; workflows.len()];
    let mut stack = Vec::new();

    (0..workflows.len()).find_map(|start| {
        if state[start] == DfsState::Unvisited {
            dfs(start, workflows, &mut state, &mut stack)
        } else {
            None
        }
    })
}

fn dfs(
    node: usize,
    workflows: &[CompiledWorkflow],
    state: &mut [DfsState],
    stack: &mut Vec<usize>,
) -> Option<Vec<usize>> {
    state[node] = DfsState::InStack;
    stack.push(node);

    for rule in &workflows[node].rules {
        let CompiledTarget::Workflow(next) = rule.target else {
            continue;
        };
        match state[next] {
            DfsState::InStack => {
                let pos = stack.iter().position(|&n| n == next).unwrap_or(0);
                let mut cycle = stack[pos..].to_vec();
                cycle.push(next);
                return Some(cycle);
            }
            DfsState::Unvisited => {
                if let Some(cycle) = dfs(next, workflows, state, stack) {
                    return Some(cycle);
                }
            }
            DfsState::Done => {}
        }
    }

    stack.pop();
    state[node] = DfsState::Done;
    None
}
