use crate::parser::Parser;
use std::sync::Arc;

/// A shared, type-erased parser
///
/// Combinator types nest, so a rule that mentions itself (directly or through
/// other rules) has no finite concrete type. Erasing it behind an `Arc` gives
/// the rule a nameable type that is cheap to clone and safe to share across threads.
pub type BoxedParser<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt: Parser + Sized + Send + Sync + 'static {
    fn boxed(self) -> BoxedParser<Self::Output> {
        Arc::new(self)
    }
}

impl<P> BoxedExt for P where P: Parser + Send + Sync + 'static {}
