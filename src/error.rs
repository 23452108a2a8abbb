/// Why a whole-input parse was rejected
///
/// Parsers themselves never produce this: a failed match is an empty
/// [`ParseResult`](crate::ParseResult). It only appears at the
/// [`complete`](crate::complete) boundary, where leftover input matters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The parser produced no candidate at all
    #[error("Invalid input")]
    NoMatch,
    /// The parser succeeded but left a non-empty suffix behind
    #[error("Unused input: {remainder}")]
    UnusedInput { remainder: String },
}

impl ParseError {
    /// The unconsumed suffix, if the parse got that far
    pub fn remainder(&self) -> Option<&str> {
        match self {
            ParseError::NoMatch => None,
            ParseError::UnusedInput { remainder } => Some(remainder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_display() {
        assert_eq!(ParseError::NoMatch.to_string(), "Invalid input");
        assert_eq!(ParseError::NoMatch.remainder(), None);
    }

    #[test]
    fn test_unused_input_display() {
        let error = ParseError::UnusedInput {
            remainder: "^4".to_string(),
        };
        assert_eq!(error.to_string(), "Unused input: ^4");
        assert_eq!(error.remainder(), Some("^4"));
    }
}
