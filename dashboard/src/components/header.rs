//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Vehicle Dashboard"</h1>
                <p class="subtitle">"Fleet records over REST + Rust WASM"</p>
            </div>
        </header>
    }
}
