pub mod literal;
pub mod whitespace;

pub use literal::{char, string};
pub use whitespace::space;
