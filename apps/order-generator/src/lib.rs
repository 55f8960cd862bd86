// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Order Generator - Rust Core Library
//!
//! Interactive generator of thinkorswim CUSTOM order lines for SPX
//! multi-leg option trades.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core logic with no I/O
//!   - `option_chain`: Raw chain shape, normalization, nearest-match selection
//!   - `trade_structure`: Legs, components, the trade catalog
//!   - `order_entry`: Trade-size divisor, net direction, expiration labels, order line
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `QuoteProviderPort`, `TradeCatalogPort`, `OrderSinkPort`
//!   - `use_cases`: `GenerateOrder`
//!   - `services`: The interactive session state machine
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `quote_provider`: TD Ameritrade chains API, JSON fixture
//!   - `persistence`: Trade catalog JSON file, order text file, in-memory versions

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration with environment interpolation.
pub mod config;

/// Crate-level error aggregation and classification.
pub mod error;

/// Console tracing setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::option_chain::{ContractRecord, OptionChainRaw, OptionRight};
pub use domain::order_entry::{OrderAssembler, OrderLine, OrderSide};
pub use domain::shared::Symbol;
pub use domain::trade_structure::{LegDefinition, TradeCatalog, TradeComponent, TradeStructure};

// Application re-exports
pub use application::ports::{OrderSinkPort, QuoteProviderPort, TradeCatalogPort, WriteMode};
pub use application::services::{InteractiveSession, SessionSummary};
pub use application::use_cases::GenerateOrderUseCase;

// Infrastructure re-exports
pub use infrastructure::persistence::{
    FileOrderSink, InMemoryOrderSink, InMemoryTradeCatalog, JsonTradeCatalog,
};
pub use infrastructure::quote_provider::{FixtureQuoteProvider, TdaConfig, TdaQuoteProvider};

pub use config::{Config, ConfigError, load_config};
pub use error::{ErrorCode, GeneratorError};
