//! Generate Order Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::{ProviderError, QuoteProviderPort};
use crate::domain::option_chain::{
    ChainError, ContractRecord, OptionChainRaw, has_usable_deltas, normalize, select_for_leg,
};
use crate::domain::order_entry::{OrderAssembler, OrderLine};
use crate::domain::shared::Symbol;
use crate::domain::trade_structure::{TradeComponent, TradeStructure};
use crate::error::GeneratorError;

/// Use case for turning a trade structure into order lines against a
/// freshly fetched option chain.
pub struct GenerateOrderUseCase<P>
where
    P: QuoteProviderPort,
{
    provider: Arc<P>,
    symbol: Symbol,
    assembler: OrderAssembler,
    max_fetch_attempts: u32,
}

impl<P> GenerateOrderUseCase<P>
where
    P: QuoteProviderPort,
{
    /// Create a new `GenerateOrderUseCase`.
    ///
    /// `symbol` is the underlying as the provider names it; `assembler`
    /// carries the order-entry symbol and multiplier.
    pub fn new(
        provider: Arc<P>,
        symbol: Symbol,
        assembler: OrderAssembler,
        max_fetch_attempts: u32,
    ) -> Self {
        Self {
            provider,
            symbol,
            assembler,
            max_fetch_attempts: max_fetch_attempts.max(1),
        }
    }

    /// Chain fetches allowed per trade.
    #[must_use]
    pub const fn max_fetch_attempts(&self) -> u32 {
        self.max_fetch_attempts
    }

    /// Execute the use case as of now.
    ///
    /// # Errors
    ///
    /// See [`Self::execute_at`].
    pub async fn execute(&self, trade: &TradeStructure) -> Result<Vec<OrderLine>, GeneratorError> {
        self.execute_at(trade, Utc::now()).await
    }

    /// Execute the use case with days-to-expiration measured from `as_of`.
    ///
    /// One chain is fetched per attempt and shared by every component of the
    /// trade. Empty branches, an all-sentinel chain, and malformed quotes
    /// trigger a refetch until `max_fetch_attempts` is spent.
    ///
    /// # Errors
    ///
    /// - `Provider` if the chain cannot be fetched
    /// - `Chain` if the last attempt still had unusable data
    /// - `Assembly` if a leg matched nothing or quantities do not split
    pub async fn execute_at(
        &self,
        trade: &TradeStructure,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<OrderLine>, GeneratorError> {
        let mut attempt = 1;

        loop {
            let chain = self.fetch_chain().await?;

            let outcome = self
                .validate_chain(&chain)
                .map_err(GeneratorError::from)
                .and_then(|()| self.assemble_trade(trade, &chain, as_of));

            match outcome {
                Err(GeneratorError::Chain(e)) if attempt < self.max_fetch_attempts => {
                    tracing::warn!(
                        error = %e,
                        attempt,
                        max_attempts = self.max_fetch_attempts,
                        "Unusable option chain, refetching"
                    );
                    attempt += 1;
                }
                Ok(lines) => {
                    tracing::info!(
                        trade = %trade.trade_name,
                        lines = lines.len(),
                        attempts = attempt,
                        "Generated order"
                    );
                    return Ok(lines);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Fetch the full chain for the configured underlying.
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn fetch_chain(&self) -> Result<OptionChainRaw, ProviderError> {
        self.provider.option_chain(&self.symbol).await
    }

    /// Check that a chain is worth selecting from.
    ///
    /// # Errors
    ///
    /// - `EmptyChain` if either branch has no expirations
    /// - `BadData` if no quote carries a usable delta
    pub fn validate_chain(&self, chain: &OptionChainRaw) -> Result<(), ChainError> {
        if let Some(branch) = chain.empty_branch() {
            return Err(ChainError::EmptyChain {
                symbol: self.symbol.to_string(),
                branch: branch.label().to_string(),
            });
        }

        if !has_usable_deltas(chain) {
            return Err(ChainError::BadData {
                symbol: self.symbol.to_string(),
            });
        }

        tracing::debug!(strikes = chain.strike_count(), "Option chain accepted");
        Ok(())
    }

    /// Build one order line per trade component from a validated chain.
    ///
    /// # Errors
    ///
    /// - `Chain` if a quote is malformed
    /// - `Assembly` if a leg matched nothing or quantities do not split
    pub fn assemble_trade(
        &self,
        trade: &TradeStructure,
        chain: &OptionChainRaw,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<OrderLine>, GeneratorError> {
        trade
            .trade_components
            .iter()
            .map(|component| -> Result<OrderLine, GeneratorError> {
                let selections = self.select(component, chain, as_of)?;
                Ok(self.assembler.assemble(component, selections)?)
            })
            .collect()
    }

    fn select(
        &self,
        component: &TradeComponent,
        chain: &OptionChainRaw,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Vec<ContractRecord>>, ChainError> {
        component
            .legs
            .iter()
            .map(|leg| -> Result<Vec<ContractRecord>, ChainError> {
                let records = normalize(chain, leg, self.symbol.as_str(), as_of)?;
                Ok(select_for_leg(&records, leg))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::option_chain::{OptionRight, RawContractQuote, SENTINEL_DELTA};
    use crate::domain::order_entry::{AssemblyError, OrderSide};
    use crate::domain::trade_structure::LegDefinition;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use indexmap::IndexMap;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Provider that replays canned responses, repeating the last one.
    struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<OptionChainRaw, ProviderError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<OptionChainRaw, ProviderError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl QuoteProviderPort for ScriptedProvider {
        async fn option_chain(&self, _symbol: &Symbol) -> Result<OptionChainRaw, ProviderError> {
            *self.calls.lock().unwrap() += 1;
            let mut responses = self.responses.lock().unwrap();
            if responses.len() > 1 {
                responses.pop_front().unwrap()
            } else {
                responses.front().cloned().unwrap()
            }
        }
    }

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 15, 0, 0).unwrap()
    }

    fn quote(right: &str, strike: f64, delta: f64, mark: f64) -> RawContractQuote {
        let expiry = as_of() + Duration::days(30) + Duration::hours(6);
        RawContractQuote {
            put_call: Some(right.to_string()),
            symbol: None,
            description: Some(format!("SPXW Feb 01 2024 {strike} {right} (PM)")),
            strike_price: Some(strike),
            mark: Some(mark),
            delta: Some(delta),
            expiration_date: Some(expiry.timestamp_millis()),
            days_to_expiration: Some(30),
        }
    }

    fn chain(calls: Vec<RawContractQuote>, puts: Vec<RawContractQuote>) -> OptionChainRaw {
        fn to_map(quotes: Vec<RawContractQuote>) -> crate::domain::option_chain::ExpDateMap {
            let strikes: IndexMap<String, Vec<RawContractQuote>> = quotes
                .into_iter()
                .map(|q| (format!("{:.1}", q.strike_price.unwrap()), vec![q]))
                .collect();
            let mut map = IndexMap::new();
            if !strikes.is_empty() {
                map.insert("2024-02-01:30".to_string(), strikes);
            }
            map
        }

        OptionChainRaw {
            symbol: Some("$SPX.X".to_string()),
            status: Some("SUCCESS".to_string()),
            call_exp_date_map: to_map(calls),
            put_exp_date_map: to_map(puts),
        }
    }

    fn good_chain() -> OptionChainRaw {
        chain(
            vec![quote("CALL", 4900.0, 0.20, 2.0)],
            vec![
                quote("PUT", 4500.0, -0.16, 5.0),
                quote("PUT", 4450.0, -0.10, 3.0),
            ],
        )
    }

    fn put_vertical() -> TradeStructure {
        let leg = |leg_id, delta, quantity| LegDefinition {
            leg_id,
            option_type: OptionRight::Put,
            dte: 30,
            delta,
            quantity,
        };
        TradeStructure {
            trade_name: "Put Vertical".to_string(),
            trade_components: vec![TradeComponent {
                number_of_legs: 2,
                legs: vec![leg(0, 16.0, -1), leg(1, 10.0, 1)],
            }],
        }
    }

    fn use_case(provider: Arc<ScriptedProvider>, attempts: u32) -> GenerateOrderUseCase<ScriptedProvider> {
        GenerateOrderUseCase::new(
            provider,
            Symbol::new("$SPX.X"),
            OrderAssembler::new("SPX", 100),
            attempts,
        )
    }

    #[tokio::test]
    async fn generates_order_line() {
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(good_chain())]));
        let lines = use_case(provider.clone(), 3)
            .execute_at(&put_vertical(), as_of())
            .await
            .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].side, OrderSide::Sell);
        assert_eq!(
            lines[0].to_string(),
            "SELL +1 -1/1 CUSTOM SPX 100 (Weeklys) 01 FEB 24/01 FEB 24 4500/4450 PUT/PUT @ LMT"
        );
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn empty_branch_is_refetched() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Ok(chain(vec![], vec![quote("PUT", 4500.0, -0.16, 5.0)])),
            Ok(good_chain()),
        ]));

        let lines = use_case(provider.clone(), 3)
            .execute_at(&put_vertical(), as_of())
            .await
            .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn bad_data_reported_after_attempts_are_spent() {
        let bad = chain(
            vec![quote("CALL", 4900.0, SENTINEL_DELTA, 2.0)],
            vec![quote("PUT", 4500.0, SENTINEL_DELTA, 5.0)],
        );
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(bad)]));

        let err = use_case(provider.clone(), 3)
            .execute_at(&put_vertical(), as_of())
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Chain(ChainError::BadData { .. })));
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test]
    async fn provider_error_is_not_refetched() {
        let provider = Arc::new(ScriptedProvider::new(vec![Err(
            ProviderError::MissingApiKey,
        )]));

        let err = use_case(provider.clone(), 3)
            .execute_at(&put_vertical(), as_of())
            .await
            .unwrap_err();

        assert!(matches!(err, GeneratorError::Provider(ProviderError::MissingApiKey)));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn unmatched_leg_fails_the_trade() {
        // Only calls carry usable deltas; the put legs have nothing to match.
        let only_calls = chain(
            vec![quote("CALL", 4900.0, 0.20, 2.0)],
            vec![quote("PUT", 4500.0, SENTINEL_DELTA, 5.0)],
        );
        let provider = Arc::new(ScriptedProvider::new(vec![Ok(only_calls)]));

        let err = use_case(provider, 1)
            .execute_at(&put_vertical(), as_of())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GeneratorError::Assembly(AssemblyError::UnmatchedLeg { leg_id: 0 })
        ));
    }
}
