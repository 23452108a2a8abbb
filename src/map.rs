use super::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Debug, Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, T, U> Parser for Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(input)
            .into_iter()
            .map(|(value, rest)| ((self.mapper)(value), rest))
            .collect()
    }
}

/// Convenience function to create a Map parser
///
/// Takes the function first, so `fmap(f, p)` reads like the functor law it obeys.
pub fn fmap<P, F, T, U>(mapper: F, parser: P) -> Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
