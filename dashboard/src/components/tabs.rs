//! Tab navigation component

use leptos::prelude::*;

/// which view the overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Create,
    Listing,
}

#[component]
pub fn TabNav(
    active_tab: ReadSignal<Tab>,
    set_active_tab: WriteSignal<Tab>,
    set_overlay_open: WriteSignal<bool>,
) -> impl IntoView {
    // selecting a tab always (re)opens the overlay; the selected view mounts
    // fresh, which also discards any notice or draft from a previous visit
    let select = move |tab: Tab| {
        set_active_tab.set(tab);
        set_overlay_open.set(true);
    };

    view! {
        <div class="tabs">
            <button
                class=move || if active_tab.get() == Tab::Create { "tab active" } else { "tab" }
                on:click=move |_| select(Tab::Create)
            >
                "Create"
            </button>
            <button
                class=move || if active_tab.get() == Tab::Listing { "tab active" } else { "tab" }
                on:click=move |_| select(Tab::Listing)
            >
                "Vehicle List"
            </button>
        </div>
    }
}
