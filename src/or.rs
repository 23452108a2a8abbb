use super::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Choice is committed: once `first` succeeds its result is final, even if an
/// enclosing parser fails afterwards. `second` always sees the original input.
#[derive(Debug, Clone)]
pub struct OrElse<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> OrElse<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        OrElse { first, second }
    }
}

impl<P1, P2, O> Parser for OrElse<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let result = self.first.parse(input);
        if result.is_empty() {
            self.second.parse(input)
        } else {
            result
        }
    }
}

/// Extension trait to add .or_else() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or_else<P>(self, other: P) -> OrElse<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        OrElse::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an OrElse parser
pub fn or_else<P1, P2, O>(first: P1, second: P2) -> OrElse<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    OrElse::new(first, second)
}
