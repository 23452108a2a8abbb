use crate::bind::bind;
use crate::parser::Parser;
use crate::pure::pure;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open`, then `parser`, then `close`, and returns only the value of
/// `parser`. Whitespace is not skipped unless the delimiters are tokens.
pub fn between<O, P, C>(open: O, parser: P, close: C) -> impl Parser<Output = P::Output> + Clone
where
    O: Parser + Clone,
    P: Parser + Clone,
    C: Parser + Clone,
    P::Output: Clone,
{
    bind(open, move |_| {
        let close = close.clone();
        bind(parser.clone(), move |value| {
            bind(close.clone(), move |_| pure(value.clone()))
        })
    })
}
