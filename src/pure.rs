use crate::parser::{ParseResult, Parser};

/// Parser that always succeeds with a fixed value without consuming input
#[derive(Debug, Clone)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<T: Clone> Parser for Pure<T> {
    type Output = T;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        vec![(self.value.clone(), input)]
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Clone>(value: T) -> Pure<T> {
    Pure::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_leaves_input_untouched() {
        let parser = pure(1);
        assert_eq!(parser.parse("abc"), vec![(1, "abc")]);
    }

    #[test]
    fn test_pure_on_empty_input() {
        let parser = pure(1);
        assert_eq!(parser.parse(""), vec![(1, "")]);
    }

    #[test]
    fn test_pure_is_reusable() {
        let parser = pure(String::from("x"));
        assert_eq!(parser.parse("a"), parser.parse("a"));
        assert_eq!(parser.parse("b"), vec![("x".to_string(), "b")]);
    }
}
