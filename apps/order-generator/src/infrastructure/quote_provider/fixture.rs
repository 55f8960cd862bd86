//! Fixture quote provider for offline runs and testing.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{ProviderError, QuoteProviderPort};
use crate::domain::option_chain::OptionChainRaw;
use crate::domain::shared::Symbol;

/// Serves one fixed option chain regardless of symbol.
#[derive(Debug)]
pub struct FixtureQuoteProvider {
    chain: OptionChainRaw,
    source: Option<PathBuf>,
    requests: AtomicUsize,
}

impl FixtureQuoteProvider {
    /// Serve `chain` as-is.
    #[must_use]
    pub const fn new(chain: OptionChainRaw) -> Self {
        Self {
            chain,
            source: None,
            requests: AtomicUsize::new(0),
        }
    }

    /// Load a chain saved in the provider's JSON response format.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ProviderError::Decode {
            message: format!("{}: {e}", path.display()),
        })?;
        let chain = serde_json::from_str(&content).map_err(|e| ProviderError::Decode {
            message: format!("{}: {e}", path.display()),
        })?;

        Ok(Self {
            chain,
            source: Some(path.to_path_buf()),
            requests: AtomicUsize::new(0),
        })
    }

    /// Number of chains served so far.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProviderPort for FixtureQuoteProvider {
    async fn option_chain(&self, symbol: &Symbol) -> Result<OptionChainRaw, ProviderError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            symbol = %symbol,
            source = ?self.source,
            strikes = self.chain.strike_count(),
            "Serving fixture option chain"
        );
        Ok(self.chain.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn serves_the_same_chain_every_time() {
        let provider = FixtureQuoteProvider::new(OptionChainRaw::default());
        let symbol = Symbol::new("$SPX.X");

        provider.option_chain(&symbol).await.unwrap();
        let chain = provider.option_chain(&symbol).await.unwrap();

        assert_eq!(chain, OptionChainRaw::default());
        assert_eq!(provider.requests(), 2);
    }

    #[test]
    fn loads_provider_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"symbol": "$SPX.X", "status": "SUCCESS", "callExpDateMap": {{}}, "putExpDateMap": {{}}}}"#
        )
        .unwrap();

        let provider = FixtureQuoteProvider::from_file(file.path()).unwrap();
        assert_eq!(provider.chain.status.as_deref(), Some("SUCCESS"));
    }

    #[test]
    fn unreadable_file_is_decode_error() {
        let err = FixtureQuoteProvider::from_file("/nonexistent/chain.json").unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
    }
}
