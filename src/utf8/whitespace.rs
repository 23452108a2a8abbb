use crate::bind::bind;
use crate::many::many;
use crate::parser::Parser;
use crate::pure::pure;
use crate::sat::sat;

/// Parser that skips a maximal run of Unicode whitespace
///
/// Never fails; consumes nothing when the input does not start with whitespace.
///
/// Whitespace is [`char::is_whitespace`], the Unicode `White_Space` property.
/// That is not the ECMAScript `\s` class: U+0085 (next line) is whitespace
/// here, while U+FEFF (byte order mark) is not.
pub fn space() -> impl Parser<Output = ()> + Clone {
    bind(many(sat(|c| c.is_whitespace())), |_| pure(()))
}
