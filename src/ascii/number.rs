use crate::bind::bind;
use crate::or::or_else;
use crate::parser::Parser;
use crate::pure::pure;
use crate::some::some;
use crate::utf8::char;

use super::class::digit;

/// Run of ASCII digits read as `sign` followed by those digits
fn signed_digits(sign: &'static str) -> impl Parser<Output = i64> + Clone {
    bind(some(digit()), move |digits: Vec<char>| {
        let mut text = String::with_capacity(sign.len() + digits.len());
        text.push_str(sign);
        text.extend(digits);
        text.parse::<i64>().ok().map(pure)
    })
}

/// Parser for a run of ASCII digits as a natural number
///
/// Fails if the run does not fit in an `i64`.
pub fn nat() -> impl Parser<Output = i64> + Clone {
    signed_digits("")
}

/// Parser for an optionally negative integer: `-` directly followed by a natural
///
/// The full `i64` range is accepted, `i64::MIN` included, since the negative
/// branch reads its digits with the sign rather than negating a natural.
pub fn int() -> impl Parser<Output = i64> + Clone {
    or_else(bind(char('-'), |_| signed_digits("-")), nat())
}
