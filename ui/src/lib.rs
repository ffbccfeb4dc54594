// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod converter_state;
mod screens;

use components::pico::Card;
use components::pico::Container;
use screens::converter::ConverterScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Exactly one fetch per page load. Success and failure both end the
    // loading state; a failure falls back to an empty coin list and is only
    // surfaced on the diagnostic log, never to the viewer.
    let coins = use_resource(move || async move {
        match api::tickers().await {
            Ok(list) => list,
            Err(e) => {
                dioxus_logger::tracing::error!("Error fetching tickers: {e}");
                Vec::new()
            }
        }
    });

    let coins = coins.read();
    match &*coins {
        // The fetch has not resolved yet.
        None => rsx! {
            Container {
                h1 { "The Coins!" }
                Card {
                    strong { "Loading..." }
                    progress {} // An indeterminate progress bar
                }
            }
        },
        // Loading is over; an empty list just renders a bare dropdown.
        Some(list) => rsx! {
            Container {
                h1 { "The Coins!" }
                ConverterScreen { coins: list.clone() }
            }
        },
    }
}
