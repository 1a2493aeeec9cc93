//! Vehicle creation tab component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::{VehicleDraft, VehicleStatus};

use super::notice::{Notice, NoticeBanner};
use crate::api;

#[component]
pub fn CreateVehicleTab(set_overlay_open: WriteSignal<bool>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(VehicleStatus::Active);
    let (saving, set_saving) = signal(false);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    // submit action
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let draft = VehicleDraft {
            name: name.get(),
            status: status.get(),
        };
        if !draft.is_valid() {
            return;
        }

        set_saving.set(true);
        set_notice.set(None);

        leptos::task::spawn_local(async move {
            // try_set: the overlay may close before the request settles, and a
            // late resolution must not touch disposed state
            match api::create_vehicle(&draft).await {
                Ok(()) => {
                    set_notice.try_set(Some(Notice::success("Vehicle created successfully!")));
                    // reset the draft only on success; a failed submit keeps
                    // the user's input intact
                    set_name.try_set(String::new());
                    set_status.try_set(VehicleStatus::Active);
                }
                Err(e) => {
                    let text = if e.is_empty() {
                        "An error occurred".to_string()
                    } else {
                        e
                    };
                    set_notice.try_set(Some(Notice::error(text)));
                }
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <form class="vehicle-form" on:submit=submit>
            <h2>"Create a New Vehicle"</h2>

            <div class="field">
                <label>"Vehicle Name"</label>
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label>"Vehicle Status"</label>
                <select
                    required
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| {
                        if let Ok(parsed) = event_target_value(&ev).parse::<VehicleStatus>() {
                            set_status.set(parsed);
                        }
                    }
                >
                    {VehicleStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="form-actions">
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Creating..." } else { "Create Vehicle" }}
                </button>
                <button
                    type="button"
                    class="secondary"
                    on:click=move |_| set_overlay_open.set(false)
                >
                    "Close"
                </button>
            </div>

            {move || notice.get().map(|n| view! { <NoticeBanner notice=n /> })}
        </form>
    }
}
