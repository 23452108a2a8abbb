//! Arithmetic expressions over naturals, evaluated while parsing.
//!
//! ```text
//! expr   ::= term ("+" expr | "-" expr)?
//! term   ::= factor ("*" term)?
//! factor ::= "(" expr ")" | natural
//! ```
//!
//! Both binary rules recurse on their right operand, so `10-2-3` is `10-(2-3)`.
//! The rules are built once per process and refer to each other through
//! [`lazy`], which keeps their construction from recursing.

use crate::between::between;
use crate::bind::bind;
use crate::boxed::{BoxedExt, BoxedParser};
use crate::error::ParseError;
use crate::lazy::lazy;
use crate::or::or_else;
use crate::parser::complete;
use crate::pure::pure;
use crate::token::{natural, symbol};
use once_cell::sync;

static EXPR: sync::Lazy<BoxedParser<i64>> = sync::Lazy::new(|| {
    bind(lazy(term), |t: i64| {
        or_else(
            bind(symbol("+"), move |_| {
                bind(lazy(expr), move |e: i64| t.checked_add(e).map(pure))
            }),
            or_else(
                bind(symbol("-"), move |_| {
                    bind(lazy(expr), move |e: i64| t.checked_sub(e).map(pure))
                }),
                pure(t),
            ),
        )
    })
    .boxed()
});

static TERM: sync::Lazy<BoxedParser<i64>> = sync::Lazy::new(|| {
    bind(lazy(factor), |f: i64| {
        or_else(
            bind(symbol("*"), move |_| {
                bind(lazy(term), move |t: i64| f.checked_mul(t).map(pure))
            }),
            pure(f),
        )
    })
    .boxed()
});

static FACTOR: sync::Lazy<BoxedParser<i64>> = sync::Lazy::new(|| {
    or_else(between(symbol("("), lazy(expr), symbol(")")), natural()).boxed()
});

/// Sum or difference of terms, grouped to the right
pub fn expr() -> BoxedParser<i64> {
    EXPR.clone()
}

/// Product of factors, grouped to the right
pub fn term() -> BoxedParser<i64> {
    TERM.clone()
}

/// Parenthesised expression or natural number token
pub fn factor() -> BoxedParser<i64> {
    FACTOR.clone()
}

/// Evaluate `input`, which must be a single expression and nothing else
///
/// An operation that would overflow `i64` does not parse, which typically
/// surfaces as [`ParseError::UnusedInput`] starting at that operator.
pub fn evaluate(input: &str) -> Result<i64, ParseError> {
    let result = complete(&expr(), input);
    log::debug!("evaluated {input:?} to {result:?}");
    result
}
