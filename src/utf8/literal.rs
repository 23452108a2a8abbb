use crate::bind::bind;
use crate::boxed::{BoxedExt, BoxedParser};
use crate::parser::Parser;
use crate::pure::pure;
use crate::sat::sat;

/// Parser that matches exactly the character `expected`
pub fn char(expected: char) -> impl Parser<Output = char> + Clone {
    sat(move |c| c == expected)
}

/// Parser that matches the whole of `literal` and returns it
///
/// Matches the first character, then the rest of the literal recursively. A
/// partial match is a failed match: nothing of it shows up in the result.
pub fn string(literal: &str) -> BoxedParser<String> {
    let literal = literal.to_owned();
    let mut chars = literal.chars();
    let Some(first) = chars.next() else {
        return pure(literal).boxed();
    };
    let rest = chars.as_str().to_owned();

    bind(char(first), move |_| {
        let literal = literal.clone();
        bind(string(&rest), move |_| pure(literal.clone()))
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char() {
        let parser = char('a');
        assert_eq!(parser.parse("abc"), vec![('a', "bc")]);
        assert_eq!(parser.parse("bcd"), vec![]);
        assert_eq!(parser.parse(""), vec![]);
    }

    #[test]
    fn test_char_non_ascii() {
        assert_eq!(char('λ').parse("λx"), vec![('λ', "x")]);
    }

    #[test]
    fn test_string() {
        let parser = string("abc");
        assert_eq!(parser.parse("abcdef"), vec![("abc".to_string(), "def")]);
        assert_eq!(parser.parse("ab1234"), vec![]);
        assert_eq!(parser.parse(""), vec![]);
    }

    #[test]
    fn test_string_prefix_of_input_only() {
        assert_eq!(string("abc").parse("ab"), vec![]);
        assert_eq!(string("abc").parse("xabc"), vec![]);
    }

    #[test]
    fn test_empty_string_always_matches() {
        assert_eq!(string("").parse("abc"), vec![(String::new(), "abc")]);
        assert_eq!(string("").parse(""), vec![(String::new(), "")]);
    }

    #[test]
    fn test_string_consumes_exact_length() {
        let input = "héllo wörld";
        let (matched, rest) = string("héllo").parse(input).remove(0);
        assert_eq!(matched, "héllo");
        assert_eq!(rest, " wörld");
        assert_eq!(input.chars().count() - rest.chars().count(), 5);
    }
}
