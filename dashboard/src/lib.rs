//! ==============================================================================
//! lib.rs - Vehicle Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm dashboard for managing vehicle records against a remote
//!     REST api. provides a creation form and a list view with inline
//!     status editing.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the vehicle api via fetch
//!     - each view owns its state; selecting a tab mounts that view fresh
//!       inside a modal overlay, so there is no shared or cached state
//!
//! ==============================================================================

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod api;
mod components;

use components::{CreateVehicleTab, Header, Tab, TabNav, VehicleListTab};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    // track active tab and overlay visibility
    let (active_tab, set_active_tab) = signal(Tab::Create);
    let (overlay_open, set_overlay_open) = signal(false);

    view! {
        <Header />
        <div class="container">
            <TabNav
                active_tab=active_tab
                set_active_tab=set_active_tab
                set_overlay_open=set_overlay_open
            />

            <Show when=move || overlay_open.get()>
                // backdrop click closes the overlay; a click inside the panel
                // must not bubble up to the backdrop handler
                <div class="overlay" on:click=move |_| set_overlay_open.set(false)>
                    <div class="overlay-panel" on:click=move |ev| ev.stop_propagation()>
                        <Show when=move || active_tab.get() == Tab::Create>
                            <CreateVehicleTab set_overlay_open=set_overlay_open />
                        </Show>
                        <Show when=move || active_tab.get() == Tab::Listing>
                            <VehicleListTab />
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
