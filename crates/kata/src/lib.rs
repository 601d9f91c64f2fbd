mod arith;
mod clock;
mod error;
pub mod fan_in;
mod fsio;
mod news;
mod parity;
mod records;
mod tally;
mod ticket;

pub use crate::arith::*;
pub use crate::clock::*;
pub use crate::error::*;
pub use crate::fsio::*;
pub use crate::news::*;
pub use crate::parity::*;
pub use crate::records::*;
pub use crate::tally::*;
pub use crate::ticket::*;
