pub mod colors;
pub mod date;
pub mod formatting;
pub mod money;
pub mod path;
pub mod table;

pub use money::{Cents, format_amount, format_signed};
