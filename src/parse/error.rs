use std::fmt;

/// Errors produced when parsing workflow/part input.
///
/// The message is winnow's rendering: the offending line, a caret under the
/// failing position, and the construct that was expected there.
#[derive(Debug)]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::new("expected rating value");
        assert_eq!(err.to_string(), "parse error: expected rating value");
        assert_eq!(err.message(), "expected rating value");
    }

    #[test]
    fn parse_failure_names_expected_construct() {
        let err = crate::parse::parse("in{x>abc:A,R}\n").unwrap_err();
        assert!(err.to_string().starts_with("parse error: "));
        assert!(err.message().contains("threshold"), "{err}");
    }
}
