use super::parser::{ParseResult, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Behaves as `or_else(some(p), pure(vec![]))`, so it never fails, but runs the
/// repetition as a loop: stack depth stays constant however long the run is.
/// Each step continues from the first candidate. The wrapped parser must
/// consume input on every success, otherwise `Many` never terminates.
#[derive(Debug, Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser + Clone,
    P::Output: Clone,
{
    type Output = Vec<P::Output>;

    fn parse<'code>(&self, mut input: &'code str) -> ParseResult<'code, Self::Output> {
        let mut results = Vec::new();

        while let Some((value, rest)) = self.parser.parse(input).into_iter().next() {
            results.push(value);
            input = rest;
        }

        vec![(results, input)]
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser + Clone,
    P::Output: Clone,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::digit;
    use crate::item::item;
    use crate::or::or_else;
    use crate::pure::pure;
    use crate::some::some;
    use crate::utf8::char;
    use proptest::prelude::*;

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(digit());
        assert_eq!(parser.parse("123abc"), vec![(vec!['1', '2', '3'], "abc")]);
    }

    #[test]
    fn test_many_zero_matches() {
        let parser = many(digit());
        assert_eq!(parser.parse("abc"), vec![(vec![], "abc")]);
    }

    #[test]
    fn test_many_empty_input() {
        let parser = many(digit());
        assert_eq!(parser.parse(""), vec![(vec![], "")]);
    }

    #[test]
    fn test_many_all_matches() {
        let parser = many(char('a'));
        assert_eq!(parser.parse("aaaa"), vec![(vec!['a'; 4], "")]);
    }

    #[test]
    fn test_many_long_run() {
        let input = "7".repeat(500);
        let (digits, rest) = many(digit()).parse(&input).remove(0);
        assert_eq!(digits.len(), 500);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_many_hundred_thousand_repetitions() {
        let input = format!("{}x", "7".repeat(100_000));
        let (digits, rest) = many(digit()).parse(&input).remove(0);
        assert_eq!(digits.len(), 100_000);
        assert!(digits.iter().all(|&d| d == '7'));
        assert_eq!(rest, "x");
    }

    proptest! {
        #[test]
        fn test_many_never_fails(input in "[a-z0-9 ]{0,12}") {
            prop_assert_eq!(many(digit()).parse(&input).len(), 1);
            prop_assert_eq!(many(item()).parse(&input).len(), 1);
        }

        #[test]
        fn test_many_is_some_or_nothing(input in "[0-9a]{0,12}") {
            let unfolded = or_else(some(digit()), pure(Vec::new()));
            prop_assert_eq!(many(digit()).parse(&input), unfolded.parse(&input));
        }

        #[test]
        fn test_many_consumes_a_suffix(input in "[0-9 a-z]{0,12}") {
            for (_, rest) in many(digit()).parse(&input) {
                prop_assert!(input.ends_with(rest));
                prop_assert!(rest.len() <= input.len());
            }
        }
    }
}
