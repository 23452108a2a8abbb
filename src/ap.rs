use crate::parser::{ParseResult, Parser};

/// Applicative sequencing: parse a function, then parse its argument
///
/// `function` runs first; `argument` runs on what it leaves behind and the
/// function is applied to each argument value. If either side fails, so does `Ap`.
#[derive(Debug, Clone)]
pub struct Ap<PF, PX> {
    function: PF,
    argument: PX,
}

impl<PF, PX> Ap<PF, PX> {
    pub fn new(function: PF, argument: PX) -> Self {
        Ap { function, argument }
    }
}

impl<PF, PX, F, B> Parser for Ap<PF, PX>
where
    PF: Parser<Output = F>,
    PX: Parser,
    F: Fn(PX::Output) -> B,
{
    type Output = B;

    fn parse<'code>(&self, input: &'code str) -> ParseResult<'code, Self::Output> {
        let Some((function, rest)) = self.function.parse(input).into_iter().next() else {
            return Vec::new();
        };

        self.argument
            .parse(rest)
            .into_iter()
            .map(|(value, rest)| (function(value), rest))
            .collect()
    }
}

/// Convenience function to create an Ap parser
pub fn ap<PF, PX, F, B>(function: PF, argument: PX) -> Ap<PF, PX>
where
    PF: Parser<Output = F>,
    PX: Parser,
    F: Fn(PX::Output) -> B,
{
    Ap::new(function, argument)
}
