use crate::bind::bind;
use crate::many::many;
use crate::parser::Parser;
use crate::pure::pure;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). It returns a vector of all items.
///
/// # Note
/// - Requires at least one element
/// - A trailing separator is left unconsumed
/// - Does not handle whitespace automatically
pub fn separated_list<P, S>(parser: P, separator: S) -> impl Parser<Output = Vec<P::Output>> + Clone
where
    P: Parser + Clone,
    S: Parser + Clone,
    P::Output: Clone,
{
    let element = parser.clone();
    let tail = many(bind(separator, move |_| element.clone()));

    bind(parser, move |head| {
        bind(tail.clone(), move |rest: Vec<P::Output>| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(head.clone());
            items.extend(rest);
            pure(items)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{ident, nat};
    use crate::utf8::char;

    #[test]
    fn test_separated_list_single_item() {
        let parser = separated_list(nat(), char(','));
        assert_eq!(parser.parse("42"), vec![(vec![42], "")]);
    }

    #[test]
    fn test_separated_list_multiple_items() {
        let parser = separated_list(nat(), char(','));
        assert_eq!(parser.parse("1,2,3;"), vec![(vec![1, 2, 3], ";")]);
    }

    #[test]
    fn test_separated_list_empty_fails() {
        let parser = separated_list(nat(), char(','));
        assert_eq!(parser.parse(""), vec![]);
        assert_eq!(parser.parse(",1"), vec![]);
    }

    #[test]
    fn test_separated_list_trailing_separator_left_over() {
        let parser = separated_list(nat(), char(','));
        assert_eq!(parser.parse("1,2,"), vec![(vec![1, 2], ",")]);
    }

    #[test]
    fn test_separated_list_identifiers() {
        let parser = separated_list(ident(), char(';'));
        assert_eq!(
            parser.parse("foo;bar2;baz"),
            vec![(
                vec!["foo".to_string(), "bar2".to_string(), "baz".to_string()],
                ""
            )]
        );
    }
}
