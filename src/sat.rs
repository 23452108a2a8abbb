use crate::bind::bind;
use crate::item::item;
use crate::parser::Parser;
use crate::pure::pure;

/// Parser that consumes a single character satisfying `predicate`
///
/// Built from `item` and `bind`: a rejected character continues with `None`,
/// which parses as `empty`.
pub fn sat<F>(predicate: F) -> impl Parser<Output = char> + Clone
where
    F: Fn(char) -> bool + Clone,
{
    bind(item(), move |c| predicate(c).then(|| pure(c)))
}
