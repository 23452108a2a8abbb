pub mod class;
pub mod ident;
pub mod number;

pub use class::{alphanum, digit, letter, lower, upper};
pub use ident::ident;
pub use number::{int, nat};
