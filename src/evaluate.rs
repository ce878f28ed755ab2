use std::time::Instant;

use tracing::trace;

use crate::types::{CompiledRule, CompiledTarget, CompiledWorkflow};
use crate::{EvaluateError, EvaluationReport, Part, Verdict};

pub(crate) fn evaluate(
    workflows: &[CompiledWorkflow],
    entry: usize,
    part: &Part,
) -> Result<Verdict, EvaluateError> {
    walk(workflows, entry, part).map(|(verdict, _)| verdict)
}

pub(crate) fn evaluate_detailed(
    workflows: &[CompiledWorkflow],
    entry: usize,
    part: &Part,
) -> Result<EvaluationReport, EvaluateError> {
    let start = Instant::now();
    let (verdict, path) = walk(workflows, entry, part)?;
    let duration = start.elapsed();

    let path = path
        .into_iter()
        .map(|idx| workflows[idx].name.clone())
        .collect();

    Ok(EvaluationReport::new(verdict, path, duration))
}

/// Follow jumps from `entry` until a terminal target is reached.
///
/// Returns the verdict and the indices of the visited workflows in order.
/// A part's route is deterministic, so re-entering a workflow means the walk
/// would never end.
fn walk(
    workflows: &[CompiledWorkflow],
    entry: usize,
    part: &Part,
) -> Result<(Verdict, Vec<usize>), EvaluateError> {
    let mut visited = vec![false; workflows.len()];
    let mut path = Vec::new();
    let mut current = entry;

    loop {
        if visited[current] {
            let err = cycle_error(workflows, &path, current);
            trace!(%part, %err, "evaluation aborted");
            return Err(err);
        }
        visited[current] = true;
        path.push(current);

        let workflow = &workflows[current];
        match route(&workflow.rules, part) {
            Some(CompiledTarget::Accept) => return Ok((Verdict::Accepted, path)),
            Some(CompiledTarget::Reject) => return Ok((Verdict::Rejected, path)),
            Some(CompiledTarget::Workflow(next)) => current = next,
            None => {
                return Err(EvaluateError::NoMatchingRule {
                    workflow: workflow.name.clone(),
                });
            }
        }
    }
}

/// Target of the first rule that fires.
fn route(rules: &[CompiledRule], part: &Part) -> Option<CompiledTarget> {
    rules.iter().find(|r| r.matches(part)).map(|r| r.target)
}

/// Cycle path from the first visit of `reentered` back to itself.
pub(crate) fn cycle_error(
    workflows: &[CompiledWorkflow],
    path: &[usize],
    reentered: usize,
) -> EvaluateError {
    let start = path.iter().position(|&i| i == reentered).unwrap_or(0);
    let mut cycle: Vec<String> = path[start..]
        .iter()
        .map(|&i| workflows[i].name.clone())
        .collect();
    cycle.push(workflows[reentered].name.clone());
    EvaluateError::Cycle { path: cycle }
}
