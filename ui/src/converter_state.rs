//! The owned state of one converter view and its transition rules.

use api::ticker;
use api::ticker::Ticker;
use api::usd::UsdAmount;

/// All mutable state of the converter: the loaded coin set, the current
/// selection with its extracted price, the raw amount text, and the last
/// conversion result.
///
/// One instance per view. The event handlers funnel every mutation through
/// the methods here, which keeps the reset-result-on-new-selection rule in
/// one place instead of scattered across the view layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConverterState {
    coins: Vec<Ticker>,
    selected: Option<Ticker>,
    active_price: UsdAmount,
    amount: String,
    result: Option<UsdAmount>,
}

impl ConverterState {
    pub fn new(coins: Vec<Ticker>) -> Self {
        Self {
            coins,
            ..Default::default()
        }
    }

    pub fn coins(&self) -> &[Ticker] {
        &self.coins
    }

    pub fn selected(&self) -> Option<&Ticker> {
        self.selected.as_ref()
    }

    /// The USD price of the current selection; zero while nothing is selected.
    pub fn active_price(&self) -> UsdAmount {
        self.active_price
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn result(&self) -> Option<UsdAmount> {
        self.result
    }

    /// Applies a dropdown change.
    ///
    /// An exact, case-sensitive symbol match replaces the selection wholesale,
    /// adopts that ticker's USD quote as the active price, and resets any
    /// previous conversion result. An unknown symbol, including the empty
    /// placeholder option, changes nothing: the prior selection persists.
    pub fn select(&mut self, symbol: &str) {
        if let Some(found) = ticker::find_by_symbol(&self.coins, symbol) {
            let found = found.clone();
            self.active_price = found.usd_price();
            self.selected = Some(found);
            self.result = None;
        }
    }

    /// Stores the raw input text. Does not touch the result; conversion only
    /// happens on an explicit button press.
    pub fn set_amount(&mut self, text: String) {
        self.amount = text;
    }

    /// Recomputes the result from the current amount text and active price.
    ///
    /// A no-op while nothing is selected. Unparseable amount text counts as
    /// zero rather than an error.
    pub fn convert(&mut self) {
        if self.selected.is_none() {
            return;
        }

        let quantity = parse_amount(&self.amount);
        self.result = Some(UsdAmount::new(quantity * self.active_price.value()));
    }
}

/// Parses the free-text amount field; anything unparseable counts as zero.
fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}
