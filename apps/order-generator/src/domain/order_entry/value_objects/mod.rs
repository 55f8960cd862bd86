//! Order Entry Value Objects

mod expiration_style;
mod order_side;
mod warning;

pub use expiration_style::ExpirationStyle;
pub use order_side::OrderSide;
pub use warning::DataQualityWarning;
