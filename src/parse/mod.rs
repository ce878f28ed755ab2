mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedSystem;

/// Parse input text into a [`ParsedSystem`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not in the workflow/part text format.
pub fn parse(input: &str) -> Result<ParsedSystem, ParseError> {
    use winnow::Parser;
    grammar::parse_system
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
