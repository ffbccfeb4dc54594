//! Defines traits and implementations for external ticker data providers.

use thiserror::Error;

use crate::ticker::Ticker;

/// An error from a ticker provider.
///
/// Transport failures and undecodable bodies are kept apart so the caller's
/// diagnostic log says which of the two actually happened.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("ticker request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ticker response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A trait for any service that can provide the full ticker list.
pub trait TickerProvider {
    /// Fetches the latest ticker list.
    async fn get_tickers(&self) -> Result<Vec<Ticker>, ProviderError>;
}

/// Provides ticker data from the public CoinPaprika API.
pub mod coin_paprika {
    use super::*;

    /// An implementation of the `TickerProvider` trait for CoinPaprika.
    pub struct CoinPaprika;

    impl TickerProvider for CoinPaprika {
        async fn get_tickers(&self) -> Result<Vec<Ticker>, ProviderError> {
            const URL: &str = "https://api.coinpaprika.com/v1/tickers";

            let client = reqwest::Client::new();
            let body = client.get(URL).send().await?.text().await?;
            let tickers = serde_json::from_str(&body)?;

            Ok(tickers)
        }
    }
}
