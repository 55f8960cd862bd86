//! Application Services
//!
//! Long-running orchestration on top of the use cases.

mod interactive_session;

pub use interactive_session::{InteractiveSession, SessionSummary};
