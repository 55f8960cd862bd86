//! JSON file trade catalog.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{CatalogError, TradeCatalogPort};
use crate::domain::trade_structure::TradeCatalog;

/// Reads trade structures from a JSON file on every load.
///
/// The file holds a single object with a `trade_structures` array.
#[derive(Debug, Clone)]
pub struct JsonTradeCatalog {
    path: PathBuf,
}

impl JsonTradeCatalog {
    /// Create a catalog backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Source file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse and validate catalog JSON; `origin` names the source in errors.
///
/// # Errors
///
/// Returns `Parse` for malformed JSON and `Invalid` for structural problems.
pub fn parse_catalog(content: &str, origin: &str) -> Result<TradeCatalog, CatalogError> {
    let catalog: TradeCatalog = serde_json::from_str(content).map_err(|e| CatalogError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })?;
    catalog.validate()?;
    Ok(catalog)
}

#[async_trait]
impl TradeCatalogPort for JsonTradeCatalog {
    async fn load(&self) -> Result<TradeCatalog, CatalogError> {
        let origin = self.path.display().to_string();
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Read {
                path: origin.clone(),
                message: e.to_string(),
            })?;

        let catalog = parse_catalog(&content, &origin)?;
        tracing::debug!(path = %origin, trades = catalog.len(), "Trade catalog loaded");
        Ok(catalog)
    }
}
