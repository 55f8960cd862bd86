//! Order Entry Aggregates

mod order_line;

pub use order_line::{OrderLeg, OrderLine};
