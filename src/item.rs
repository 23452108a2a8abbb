use crate::parser::{ParseResult, Parser};

/// Parser that consumes and returns a single character
///
/// The only parser that looks at raw input; everything else is built on top of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Item;

impl Parser for Item {
    type Output = char;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(first) => vec![(first, chars.as_str())],
            None => Vec::new(),
        }
    }
}

/// Convenience function to create an Item parser
pub fn item() -> Item {
    Item
}
