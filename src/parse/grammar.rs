use winnow::ascii::{dec_uint, line_ending, multispace0};
use winnow::combinator::{alt, cut_err, delimited, eof, opt, preceded, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{Category, CompareOp, Condition, Part, Rule, Target, Workflow};

use super::parser::ParsedSystem;

fn expected(description: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(description))
}

// -- Labels -----------------------------------------------------------------

/// Workflow names, field names and jump targets share one lexical form.
fn label<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

// -- Workflows --------------------------------------------------------------

fn compare_op(input: &mut &str) -> ModalResult<CompareOp> {
    alt(('>'.value(CompareOp::Gt), '<'.value(CompareOp::Lt))).parse_next(input)
}

fn threshold(input: &mut &str) -> ModalResult<u32> {
    dec_uint::<_, u32, _>
        .context(expected("threshold"))
        .parse_next(input)
}

/// `FIELD<VALUE:TARGET`, `FIELD>VALUE:TARGET`, or a bare `TARGET`.
fn rule(input: &mut &str) -> ModalResult<Rule> {
    let head = label.context(expected("rule")).parse_next(input)?;
    let tail = opt((
        compare_op,
        cut_err(threshold),
        cut_err(':').context(expected("':' before jump target")),
        cut_err(label).context(expected("jump target")),
    ))
    .parse_next(input)?;

    Ok(match tail {
        Some((op, threshold, _, target)) => Rule::when(
            Condition {
                field: head.to_owned(),
                op,
                threshold,
            },
            Target::from_label(target),
        ),
        None => Rule::fallback(Target::from_label(head)),
    })
}

fn workflow(input: &mut &str) -> ModalResult<Workflow> {
    let name = label.parse_next(input)?;
    let rules: Vec<Rule> = cut_err(delimited(
        '{'.context(expected("'{' after workflow name")),
        separated(1.., rule, ','),
        '}'.context(expected("',' or '}'")),
    ))
    .parse_next(input)?;

    Ok(Workflow {
        name: name.to_owned(),
        rules,
    })
}

// -- Parts ------------------------------------------------------------------

fn category(input: &mut &str) -> ModalResult<Category> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric())
        .verify_map(Category::from_name)
        .context(expected("rating category (x, m, a, s)"))
        .parse_next(input)
}

fn rating(input: &mut &str) -> ModalResult<(Category, u32)> {
    let category = cut_err(category).parse_next(input)?;
    cut_err('=').context(expected("'='")).parse_next(input)?;
    let value = cut_err(dec_uint::<_, u32, _>)
        .context(expected("rating value"))
        .parse_next(input)?;
    Ok((category, value))
}

/// `{x=V,m=V,a=V,s=V}`; any order, missing categories stay zero,
/// a repeated category keeps its last value.
fn part(input: &mut &str) -> ModalResult<Part> {
    '{'.parse_next(input)?;
    if opt('}').parse_next(input)?.is_some() {
        return Ok(Part::default());
    }
    let ratings: Vec<(Category, u32)> = separated(1.., rating, ',').parse_next(input)?;
    cut_err('}')
        .context(expected("',' or '}'"))
        .parse_next(input)?;

    Ok(ratings
        .into_iter()
        .fold(Part::default(), |part, (category, value)| {
            part.set(category, value)
        }))
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_system(input: &mut &str) -> ModalResult<ParsedSystem> {
    let workflows: Vec<Workflow> = separated(0.., workflow, line_ending).parse_next(input)?;

    let parts: Option<Vec<Part>> = opt(preceded(
        (line_ending, line_ending),
        separated(0.., part, line_ending),
    ))
    .parse_next(input)?;

    multispace0.parse_next(input)?;
    eof.context(expected("end of input")).parse_next(input)?;

    Ok(ParsedSystem {
        workflows,
        parts: parts.unwrap_or_default(),
    })
}
