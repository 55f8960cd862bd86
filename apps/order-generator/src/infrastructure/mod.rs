//! Infrastructure Layer
//!
//! Adapters implementing the ports defined in the application layer:
//!
//! - `quote_provider/`: option chain sources (TD Ameritrade API, JSON fixture)
//! - `persistence/`: trade catalog file and order file, plus in-memory versions

pub mod persistence;
pub mod quote_provider;
