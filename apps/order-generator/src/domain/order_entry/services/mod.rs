//! Order Entry Domain Services

mod order_assembler;
mod primality;
mod tie_break;

pub use order_assembler::OrderAssembler;
pub use primality::{is_prime, number_of_trades};
pub use tie_break::{FirstMatch, TieBreak};
