use crate::bind::bind;
use crate::many::many;
use crate::parser::Parser;
use crate::pure::pure;

use super::class::{alphanum, lower};

/// Parser for an identifier: a lowercase letter followed by letters and digits
pub fn ident() -> impl Parser<Output = String> + Clone {
    bind(lower(), |head| {
        bind(many(alphanum()), move |tail| {
            pure(std::iter::once(head).chain(tail).collect::<String>())
        })
    })
}
