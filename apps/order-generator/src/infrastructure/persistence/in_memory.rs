//! In-memory catalog and sink for testing.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{
    CatalogError, OrderSinkPort, SinkError, TradeCatalogPort, WriteMode,
};
use crate::domain::order_entry::OrderLine;
use crate::domain::trade_structure::TradeCatalog;

/// In-memory implementation of `TradeCatalogPort`.
#[derive(Debug, Default)]
pub struct InMemoryTradeCatalog {
    catalog: RwLock<TradeCatalog>,
}

impl InMemoryTradeCatalog {
    /// Create a catalog holding `catalog`.
    #[must_use]
    pub const fn new(catalog: TradeCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// Replace the catalog, as an edit to the backing file would.
    pub fn replace(&self, catalog: TradeCatalog) {
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog;
    }
}

#[async_trait]
impl TradeCatalogPort for InMemoryTradeCatalog {
    async fn load(&self) -> Result<TradeCatalog, CatalogError> {
        Ok(self
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

/// In-memory implementation of `OrderSinkPort`.
///
/// Keeps the sink contents as a file would, plus a log of each write.
#[derive(Debug, Default)]
pub struct InMemoryOrderSink {
    contents: RwLock<Vec<String>>,
    writes: RwLock<Vec<WriteMode>>,
}

impl InMemoryOrderSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines currently held, in order.
    #[must_use]
    pub fn contents(&self) -> Vec<String> {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Mode of every write so far.
    #[must_use]
    pub fn writes(&self) -> Vec<WriteMode> {
        self.writes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl OrderSinkPort for InMemoryOrderSink {
    async fn write(&self, lines: &[OrderLine], mode: WriteMode) -> Result<(), SinkError> {
        let mut contents = self
            .contents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if mode == WriteMode::Overwrite {
            contents.clear();
        }
        contents.extend(lines.iter().map(ToString::to_string));

        self.writes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mode);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
