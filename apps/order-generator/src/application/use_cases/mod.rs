//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod generate_order;

pub use generate_order::GenerateOrderUseCase;
