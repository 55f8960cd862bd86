//! TD Ameritrade adapter implementing `QuoteProviderPort`.

use async_trait::async_trait;

use crate::application::ports::{ProviderError, QuoteProviderPort};
use crate::domain::option_chain::OptionChainRaw;
use crate::domain::shared::Symbol;

use super::config::TdaConfig;
use super::error::TdaError;
use super::http_client::TdaHttpClient;

/// Fixed chain request parameters: every contract type, strike, month,
/// and contract standard, as single-leg quotes.
const CHAIN_QUERY: [(&str, &str); 5] = [
    ("contractType", "ALL"),
    ("strategy", "SINGLE"),
    ("range", "ALL"),
    ("expMonth", "ALL"),
    ("optionType", "ALL"),
];

/// TD Ameritrade option chain adapter.
#[derive(Debug, Clone)]
pub struct TdaQuoteProvider {
    client: TdaHttpClient,
    chains_url: String,
}

impl TdaQuoteProvider {
    /// Create a new adapter.
    pub fn new(config: &TdaConfig) -> Result<Self, TdaError> {
        Ok(Self {
            client: TdaHttpClient::new(config)?,
            chains_url: config.chains_url(),
        })
    }
}

#[async_trait]
impl QuoteProviderPort for TdaQuoteProvider {
    async fn option_chain(&self, symbol: &Symbol) -> Result<OptionChainRaw, ProviderError> {
        let mut query = vec![("symbol", symbol.as_str())];
        query.extend(CHAIN_QUERY);

        let chain: OptionChainRaw = self.client.get(&self.chains_url, &query).await?;

        tracing::debug!(
            symbol = %symbol,
            status = chain.status.as_deref().unwrap_or("UNKNOWN"),
            strikes = chain.strike_count(),
            "Fetched option chain"
        );

        Ok(chain)
    }
}
