// ui/src/components/ticker_chooser.rs
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::converter_state::ConverterState;

#[derive(Props, PartialEq, Clone)]
pub struct TickerChooserProps {
    /// Shared converter state; the chooser writes each selection into it.
    pub state: Signal<ConverterState>,
}

/// A dropdown listing every fetched coin as `"name (symbol): $price"`.
///
/// The option value is the coin's symbol, which is what the selection lookup
/// matches on. The leading placeholder option carries an empty value, so
/// re-selecting it falls through the lookup and changes nothing.
pub fn TickerChooser(mut props: TickerChooserProps) -> Element {
    let options = props
        .state
        .read()
        .coins()
        .iter()
        .map(|coin| {
            let label = format!(
                "{} ({}): {}",
                coin.name,
                coin.symbol,
                coin.usd_price().to_string_with_symbol()
            );
            (coin.id.clone(), coin.symbol.clone(), label)
        })
        .collect::<Vec<_>>();

    rsx! {
        select {
            onchange: move |evt| props.state.write().select(&evt.value()),
            option { value: "", "Select a coin" }
            for (id, symbol, label) in options {
                option {
                    key: "{id}",
                    value: "{symbol}",
                    "{label}"
                }
            }
        }
    }
}
