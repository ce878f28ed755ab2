use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::types::{
    CompiledCondition, CompiledRule, CompiledTarget, CompiledWorkflow, ENTRY_WORKFLOW,
};
use crate::{Category, CompileError, Condition, RuleSet, Target, Workflow};

pub(crate) fn compile(workflows: &[Workflow]) -> Result<RuleSet, CompileError> {
    check_names(workflows)?;

    let workflow_indices: HashMap<String, usize> = workflows
        .iter()
        .enumerate()
        .map(|(i, w)| (w.name.clone(), i))
        .collect();

    let entry = *workflow_indices
        .get(ENTRY_WORKFLOW)
        .ok_or_else(|| CompileError::MissingEntry {
            entry: ENTRY_WORKFLOW.to_owned(),
        })?;

    let compiled: Vec<CompiledWorkflow> = workflows
        .iter()
        .map(|w| compile_workflow(w, &workflow_indices))
        .collect::<Result<_, _>>()?;

    debug!(
        workflows = compiled.len(),
        rules = compiled.iter().map(|w| w.rules.len()).sum::<usize>(),
        "compiled ruleset"
    );

    Ok(RuleSet {
        workflows: compiled,
        workflow_indices,
        entry,
    })
}

fn check_names(workflows: &[Workflow]) -> Result<(), CompileError> {
    let mut seen = HashSet::new();
    for workflow in workflows {
        if Target::from_label(&workflow.name).is_terminal() {
            return Err(CompileError::ReservedName {
                name: workflow.name.clone(),
            });
        }
        if !seen.insert(workflow.name.as_str()) {
            return Err(CompileError::DuplicateWorkflow {
                name: workflow.name.clone(),
            });
        }
    }
    Ok(())
}

/// The last rule must be the only unconditional one.
fn check_fallback(workflow: &Workflow) -> Result<(), CompileError> {
    let Some((last, init)) = workflow.rules.split_last() else {
        return Err(CompileError::EmptyWorkflow {
            workflow: workflow.name.clone(),
        });
    };
    if let Some(position) = init.iter().position(|r| r.condition.is_none()) {
        return Err(CompileError::UnreachableRules {
            workflow: workflow.name.clone(),
            position,
        });
    }
    if last.condition.is_some() {
        return Err(CompileError::MissingFallback {
            workflow: workflow.name.clone(),
        });
    }
    Ok(())
}

fn compile_workflow(
    workflow: &Workflow,
    workflow_indices: &HashMap<String, usize>,
) -> Result<CompiledWorkflow, CompileError> {
    check_fallback(workflow)?;

    let rules = workflow
        .rules
        .iter()
        .map(|rule| -> Result<CompiledRule, CompileError> {
            let condition = rule
                .condition
                .as_ref()
                .map(|c| compile_condition(c, &workflow.name))
                .transpose()?;
            let target = compile_target(&rule.target, &workflow.name, workflow_indices)?;
            Ok(CompiledRule { condition, target })
        })
        .collect::<Result<_, _>>()?;

    Ok(CompiledWorkflow {
        name: workflow.name.clone(),
        rules,
    })
}

fn compile_condition(
    condition: &Condition,
    workflow_name: &str,
) -> Result<CompiledCondition, CompileError> {
    let category =
        Category::from_name(&condition.field).ok_or_else(|| CompileError::UndefinedField {
            workflow: workflow_name.to_owned(),
            field: condition.field.clone(),
        })?;
    Ok(CompiledCondition {
        category,
        op: condition.op,
        threshold: condition.threshold,
    })
}

fn compile_target(
    target: &Target,
    workflow_name: &str,
    workflow_indices: &HashMap<String, usize>,
) -> Result<CompiledTarget, CompileError> {
    match target {
        Target::Accept => Ok(CompiledTarget::Accept),
        Target::Reject => Ok(CompiledTarget::Reject),
        Target::Workflow(name) => workflow_indices
            .get(name)
            .map(|&idx| CompiledTarget::Workflow(idx))
            .ok_or_else(|| CompileError::UndefinedTarget {
                workflow: workflow_name.to_owned(),
                target: name.clone(),
            }),
    }
}
