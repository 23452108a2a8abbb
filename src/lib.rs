//! # MonaComb - Monadic Parser Combinators
//!
//! A small algebra of parsers over `&str`, in the style of list-of-successes
//! parser combinators. A parser is a value; applying it to input yields every
//! candidate `(value, remainder)` pair, and an empty list is a failed match.
//!
//! - **Primitives**: [`item`] reads one character, [`sat`] filters it
//! - **Algebra**: [`pure`], [`fmap`], [`ap`], [`bind`], [`empty`], [`or_else`]
//! - **Repetition**: [`many`], [`some`], and [`lazy`] for recursive rules
//! - **Lexing**: [`token`], [`symbol`], [`natural`], [`integer`], [`identifier`]
//!
//! Alternation is committed: the right side of [`or_else`] runs only when the
//! left side fails outright, so every result holds at most one candidate.

pub mod ap;
pub mod arith;
pub mod ascii;
pub mod between;
pub mod bind;
pub mod boxed;
pub mod empty;
pub mod error;
pub mod item;
pub mod lazy;
pub mod many;
pub mod map;
pub mod or;
pub mod parser;
pub mod pure;
pub mod sat;
pub mod separated_list;
pub mod some;
pub mod token;
pub mod utf8;

pub use ap::{Ap, ap};
pub use ascii::{alphanum, digit, ident, int, letter, lower, nat, upper};
pub use between::between;
pub use bind::{Bind, BindExt, bind};
pub use boxed::{BoxedExt, BoxedParser};
pub use empty::{Empty, empty};
pub use error::ParseError;
pub use item::{Item, item};
pub use lazy::{Lazy, lazy};
pub use many::{Many, many};
pub use map::{Map, MapExt, fmap};
pub use or::{OrElse, OrExt, or_else};
pub use parser::{ParseResult, Parser, complete, parse};
pub use pure::{Pure, pure};
pub use sat::sat;
pub use separated_list::separated_list;
pub use some::{Many1, some};
pub use token::{identifier, integer, natural, nats, symbol, token};
pub use utf8::{char, space, string};
