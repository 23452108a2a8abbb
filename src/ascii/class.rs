//! Single-character parsers for the ASCII character classes.

use crate::parser::Parser;
use crate::sat::sat;

/// `0`-`9`
pub fn digit() -> impl Parser<Output = char> + Clone {
    sat(|c| c.is_ascii_digit())
}

/// `a`-`z`
pub fn lower() -> impl Parser<Output = char> + Clone {
    sat(|c| c.is_ascii_lowercase())
}

/// `A`-`Z`
pub fn upper() -> impl Parser<Output = char> + Clone {
    sat(|c| c.is_ascii_uppercase())
}

/// `a`-`z` or `A`-`Z`
pub fn letter() -> impl Parser<Output = char> + Clone {
    sat(|c| c.is_ascii_alphabetic())
}

/// An ASCII letter or digit
pub fn alphanum() -> impl Parser<Output = char> + Clone {
    sat(|c| c.is_ascii_alphanumeric())
}
