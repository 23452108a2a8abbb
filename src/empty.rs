use crate::parser::{ParseResult, Parser};
use std::fmt;
use std::marker::PhantomData;

/// Parser that always fails without consuming input
pub struct Empty<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Empty {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Parser for Empty<T> {
    type Output = T;

    fn parse<'code>(&self, _input: &'code str) -> ParseResult<'code, Self::Output> {
        Vec::new()
    }
}

/// Convenience function to create an Empty parser
pub fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// `None` is the empty parser and `Some(p)` is `p`
///
/// Lets a `bind` continuation pick between a parser and failure without boxing.
impl<P: Parser> Parser for Option<P> {
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        match self {
            Some(parser) => parser.parse(input),
            None => Vec::new(),
        }
    }
}
