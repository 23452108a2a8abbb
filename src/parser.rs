use crate::error::ParseError;
use std::sync::Arc;

/// Every candidate parse: the produced value paired with the unconsumed suffix
/// of the input. An empty vector is a failed match.
pub type ParseResult<'code, T> = Vec<(T, &'code str)>;

/// Core parser trait for parser combinators
pub trait Parser {
    type Output;

    /// Attempt to parse a prefix of `input`
    ///
    /// Every returned remainder is a suffix of `input`. Parsers hold no mutable
    /// state, so the same input always yields the same result.
    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output>;
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        (**self).parse(input)
    }
}

/// Run `parser` against `input`
pub fn parse<'code, P>(parser: &P, input: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser + ?Sized,
{
    let result = parser.parse(input);
    log::trace!(
        "parsed {} chars of input into {} candidate(s)",
        input.chars().count(),
        result.len()
    );
    result
}

/// Run `parser` and require it to consume all of `input`
///
/// Only the first candidate is considered.
pub fn complete<P>(parser: &P, input: &str) -> Result<P::Output, ParseError>
where
    P: Parser + ?Sized,
{
    let Some((value, remainder)) = parse(parser, input).into_iter().next() else {
        log::debug!("no parse for {input:?}");
        return Err(ParseError::NoMatch);
    };

    if remainder.is_empty() {
        Ok(value)
    } else {
        log::debug!("parse of {input:?} left {remainder:?} unconsumed");
        Err(ParseError::UnusedInput {
            remainder: remainder.to_owned(),
        })
    }
}
