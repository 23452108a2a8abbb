//! Whitespace-aware tokens.
//!
//! A token skips the whitespace in front of it and nothing after it. Trailing
//! whitespace is left for the next token, or in the remainder if there is none.

use crate::ascii::{ident, int, nat};
use crate::between::between;
use crate::bind::bind;
use crate::parser::Parser;
use crate::separated_list::separated_list;
use crate::utf8::{space, string};

/// Parser that skips leading whitespace, then runs `parser`
pub fn token<P>(parser: P) -> impl Parser<Output = P::Output> + Clone
where
    P: Parser + Clone,
{
    bind(space(), move |()| parser.clone())
}

/// Literal token
pub fn symbol(literal: &str) -> impl Parser<Output = String> + Clone {
    token(string(literal))
}

/// Natural number token, see [`nat`]
pub fn natural() -> impl Parser<Output = i64> + Clone {
    token(nat())
}

/// Integer token with an optional leading `-`, see [`int`]
pub fn integer() -> impl Parser<Output = i64> + Clone {
    token(int())
}

/// Identifier token: a lowercase letter followed by letters and digits
pub fn identifier() -> impl Parser<Output = String> + Clone {
    token(ident())
}

/// Bracketed, comma separated, non-empty list of naturals: `[1, 2, 3]`
pub fn nats() -> impl Parser<Output = Vec<i64>> + Clone {
    between(
        symbol("["),
        separated_list(natural(), symbol(",")),
        symbol("]"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::letter;
    use crate::many::many;

    #[test]
    fn test_token_strips_leading_whitespace_only() {
        let parser = token(many(letter()));
        assert_eq!(
            parser.parse(" abc  "),
            vec![(vec!['a', 'b', 'c'], "  ")]
        );
    }

    #[test]
    fn test_token_without_whitespace() {
        assert_eq!(natural().parse("12 "), vec![(12, " ")]);
    }

    #[test]
    fn test_symbol() {
        assert_eq!(symbol("+").parse("  + 3"), vec![("+".to_string(), " 3")]);
        assert_eq!(symbol("+").parse("  - 3"), vec![]);
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer().parse("\t-17)"), vec![(-17, ")")]);
        assert_eq!(integer().parse(" - 17"), vec![]);
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            identifier().parse("\n  let x"),
            vec![("let".to_string(), " x")]
        );
        assert_eq!(identifier().parse("  Let"), vec![]);
    }

    #[test_log::test]
    fn test_nats() {
        assert_eq!(nats().parse(" [1, 2, 3] "), vec![(vec![1, 2, 3], " ")]);
        assert_eq!(nats().parse(" [1, 2] abc"), vec![(vec![1, 2], " abc")]);
    }

    #[test]
    fn test_nats_rejects_trailing_comma() {
        assert_eq!(nats().parse(" [1, 2,]"), vec![]);
    }

    #[test]
    fn test_nats_rejects_empty_list() {
        assert_eq!(nats().parse("[]"), vec![]);
    }
}
