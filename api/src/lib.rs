//! Shared data types and the ticker data source for the converter UI.

pub mod ticker;
pub mod ticker_providers;
pub mod usd;

use ticker::Ticker;
use ticker_providers::coin_paprika::CoinPaprika;
use ticker_providers::TickerProvider;

pub type ApiError = anyhow::Error;

/// Fetches the full ticker list from the default provider.
///
/// One best-effort attempt; callers decide how to recover from failure.
pub async fn tickers() -> Result<Vec<Ticker>, ApiError> {
    let provider = CoinPaprika;
    let tickers = provider.get_tickers().await?;

    dioxus_logger::tracing::info!("fetched {} tickers", tickers.len());

    Ok(tickers)
}
