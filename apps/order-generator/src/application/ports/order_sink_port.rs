//! Order Sink Port (Driven Port)
//!
//! Interface for persisting generated order lines.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::order_entry::OrderLine;

/// How a write treats existing sink contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Replace whatever the sink held.
    Overwrite,
    /// Add after existing contents.
    Append,
}

/// Order sink port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    /// The sink could not be written.
    #[error("Failed to write order to {path}: {message}")]
    Write {
        /// Sink location.
        path: String,
        /// Error details.
        message: String,
    },
}

/// Port for order output.
#[async_trait]
pub trait OrderSinkPort: Send + Sync {
    /// Persist the order lines of one trade, one line each.
    async fn write(&self, lines: &[OrderLine], mode: WriteMode) -> Result<(), SinkError>;

    /// Human-readable sink location.
    fn location(&self) -> String;
}
