//! The priced asset records returned by the external price source.

use serde::Deserialize;
use serde::Serialize;

use crate::usd::UsdAmount;

/// One priced asset from the ticker list.
///
/// Mirrors the shape of a CoinPaprika `/v1/tickers` element; fields the
/// converter does not use are simply not deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub quotes: Quotes,
}

/// The per-currency quote objects nested in a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotes {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

/// A single USD quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsdQuote {
    pub price: f64,
}

impl Ticker {
    /// Returns the quoted USD price, unrounded.
    pub fn usd_price(&self) -> UsdAmount {
        UsdAmount::new(self.quotes.usd.price)
    }
}

/// Finds the first ticker whose symbol matches `symbol` exactly.
///
/// Matching is case-sensitive, as received from the API.
pub fn find_by_symbol<'a>(tickers: &'a [Ticker], symbol: &str) -> Option<&'a Ticker> {
    tickers.iter().find(|ticker| ticker.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(id: &str, name: &str, symbol: &str, price: f64) -> Ticker {
        Ticker {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            quotes: Quotes {
                usd: UsdQuote { price },
            },
        }
    }

    #[test]
    fn find_by_symbol_returns_first_exact_match() {
        let tickers = vec![
            ticker("btc-bitcoin", "Bitcoin", "BTC", 65000.0),
            ticker("eth-ethereum", "Ethereum", "ETH", 3200.5),
            ticker("eth-other", "Ethereum Classic Fork", "ETH", 1.0),
        ];

        let found = find_by_symbol(&tickers, "ETH").unwrap();
        assert_eq!(found.id, "eth-ethereum");
        assert_eq!(found.usd_price().value(), 3200.5);
    }

    #[test]
    fn find_by_symbol_is_case_sensitive() {
        let tickers = vec![ticker("btc-bitcoin", "Bitcoin", "BTC", 65000.0)];

        assert!(find_by_symbol(&tickers, "btc").is_none());
        assert!(find_by_symbol(&tickers, "BTC").is_some());
    }

    #[test]
    fn find_by_symbol_rejects_empty_placeholder_value() {
        let tickers = vec![ticker("btc-bitcoin", "Bitcoin", "BTC", 65000.0)];

        assert!(find_by_symbol(&tickers, "").is_none());
    }

    #[test]
    fn deserializes_coinpaprika_payload_and_ignores_extra_fields() {
        let payload = r#"[
            {
                "id": "btc-bitcoin",
                "name": "Bitcoin",
                "symbol": "BTC",
                "rank": 1,
                "total_supply": 19700000,
                "quotes": {
                    "USD": {
                        "price": 65432.10987,
                        "volume_24h": 12345678.9,
                        "percent_change_24h": -1.2
                    }
                }
            },
            {
                "id": "doge-dogecoin",
                "name": "Dogecoin",
                "symbol": "DOGE",
                "rank": 9,
                "quotes": { "USD": { "price": 0.1234 } }
            }
        ]"#;

        let tickers: Vec<Ticker> = serde_json::from_str(payload).unwrap();

        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[0].id, "btc-bitcoin");
        assert_eq!(tickers[0].name, "Bitcoin");
        assert_eq!(tickers[0].symbol, "BTC");
        assert_eq!(tickers[0].quotes.usd.price, 65432.10987);
        assert_eq!(tickers[1].symbol, "DOGE");
        assert_eq!(tickers[1].usd_price().value(), 0.1234);
    }
}
