use super::parser::{ParseResult, Parser};
use crate::ap::ap;
use crate::lazy::lazy;
use crate::many::many;
use crate::pure::pure;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// One application of the parser is consed onto a deferred `many` of the same
/// parser, so only the first application can make it fail. The tail comes from
/// the looping `many`, so a run costs one pass and constant stack.
#[derive(Debug, Clone)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

fn cons<T: Clone>(head: T) -> impl Fn(Vec<T>) -> Vec<T> {
    move |tail| {
        let mut list = Vec::with_capacity(tail.len() + 1);
        list.push(head.clone());
        list.extend(tail);
        list
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser + Clone,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let rest = self.parser.clone();
        ap(
            ap(pure(cons::<P::Output>), self.parser.clone()),
            lazy(move || many(rest.clone())),
        )
        .parse(input)
    }
}

/// Convenience function to create a Many1 parser
pub fn some<P>(parser: P) -> Many1<P>
where
    P: Parser + Clone,
    P::Output: Clone,
{
    Many1::new(parser)
}
