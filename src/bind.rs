use crate::parser::{ParseResult, Parser};

/// Monadic sequencing: the value of one parser chooses the parser that runs next
///
/// On failure the continuation is never called.
#[derive(Debug, Clone)]
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<P, F, Q> Parser for Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    type Output = Q::Output;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Some((value, rest)) = self.parser.parse(input).into_iter().next() else {
            return Vec::new();
        };

        (self.binder)(value).parse(rest)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt: Parser + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser,
    {
        Bind::new(self, binder)
    }
}

impl<P> BindExt for P where P: Parser {}
