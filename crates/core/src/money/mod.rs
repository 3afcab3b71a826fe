//! Money parsing - turns user-entered prices and quantities into decimals.

mod money_parser;

pub use money_parser::{amount_format, parse_amount, parse_amount_str};
