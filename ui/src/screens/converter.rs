//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use api::ticker::Ticker;
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::ticker_chooser::TickerChooser;
use crate::converter_state::ConverterState;

/// The single screen of the app: pick a coin, enter an amount, convert.
#[component]
pub fn ConverterScreen(coins: Vec<Ticker>) -> Element {
    let mut state = use_signal(move || ConverterState::new(coins));

    // Pull everything the view needs out of the state up front; the event
    // handlers below take their own write borrows.
    let (selected_info, price_grouped, helper_line, amount, result_line) = {
        let st = state.read();

        let selected_info = st
            .selected()
            .map(|coin| format!("{} ({})", coin.name, coin.symbol));
        let price_grouped = st.active_price().display_grouped();
        let helper_line = match st.selected() {
            Some(_) => format!("Selected coin price: ${}", price_grouped),
            None => "Select a coin first.".to_string(),
        };
        let amount = st.amount().to_string();
        let result_line = match (st.selected(), st.result()) {
            (Some(coin), Some(usd)) => {
                Some(format!("{} → USD: ${}", coin.symbol, usd.display_precise()))
            }
            _ => None,
        };

        (selected_info, price_grouped, helper_line, amount, result_line)
    };

    rsx! {
        TickerChooser { state }

        if let Some(info) = selected_info {
            p {
                "Selected Coin: "
                strong { "{info}" }
            }
            p {
                "Current Price: "
                strong { "${price_grouped}" }
            }
        }

        h2 { "Convert to USD" }
        p { "{helper_line}" }

        input {
            r#type: "number",
            placeholder: "Enter amount",
            value: "{amount}",
            oninput: move |evt| state.write().set_amount(evt.value()),
        }
        Button {
            button_type: ButtonType::Primary,
            on_click: move |_| state.write().convert(),
            "Convert"
        }

        // Only rendered after a conversion; an unset result is not zero.
        if let Some(line) = result_line {
            h3 { "{line}" }
        }
    }
}
