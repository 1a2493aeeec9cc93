//! Vehicle listing tab component

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use shared::{EditSession, VehicleRecord, VehicleStatus};

use crate::api;

/// how long the "status updated" banner stays visible
const UPDATE_NOTICE_MS: u32 = 3_000;

#[component]
pub fn VehicleListTab() -> impl IntoView {
    let (vehicles, set_vehicles) = signal(Vec::<VehicleRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (session, set_session) = signal::<Option<EditSession>>(None);
    let (update_notice, set_update_notice) = signal::<Option<String>>(None);

    // fetch once on mount; the effect body reads no signals, so it never
    // re-runs on re-render
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::list_vehicles().await {
                Ok(list) => {
                    set_vehicles.try_set(list);
                }
                Err(_) => {
                    set_error.try_set(Some("Failed to fetch vehicles.".to_string()));
                }
            }
            set_loading.try_set(false);
        });
    });

    // selector change for the active edit session: show the new value
    // immediately, then push it to the backend
    let change_status = move |new_status: VehicleStatus| {
        let Some(active) = session.get() else {
            return;
        };

        let mut updated = active.clone();
        updated.pending_status = new_status;
        set_session.set(Some(updated));

        leptos::task::spawn_local(async move {
            match api::update_vehicle_status(&active.vehicle_id, new_status).await {
                Ok(()) => {
                    // patch the fetched entry as well, so clearing the session
                    // doesn't drop the row back to its stale pre-update status
                    set_vehicles.try_update(|list| {
                        if let Some(vehicle) = list.iter_mut().find(|v| active.is_for(&v.id)) {
                            vehicle.status = new_status;
                        }
                    });
                    set_session.try_set(None);
                    set_update_notice.try_set(Some("Status updated successfully!".to_string()));

                    TimeoutFuture::new(UPDATE_NOTICE_MS).await;
                    set_update_notice.try_set(None);
                }
                Err(_) => {
                    set_error.try_set(Some("Failed to update status.".to_string()));
                }
            }
        });
    };

    // affordance only; deletion is not wired to the backend
    let delete_vehicle = move |id: String| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!("Delete vehicle with ID: {}", id));
        }
    };

    view! {
        // loading and terminal-error states replace the whole body,
        // heading included
        {move || if loading.get() {
            view! { <p>"Loading vehicles..."</p> }.into_any()
        } else if let Some(message) = error.get() {
            view! { <p class="list-error">{message}</p> }.into_any()
        } else {
            view! {
                <div class="vehicle-list">
                    <h3>"Vehicle List"</h3>

                    {move || update_notice.get().map(|text| view! {
                        <div class="result success">
                            <div class="result-value">{text}</div>
                        </div>
                    })}

                    <table>
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Status"</th>
                                <th>"Created At"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {vehicles.get().into_iter().map(|vehicle| {
                                let row_session = session.get().filter(|s| s.is_for(&vehicle.id));
                                let edit_source = vehicle.clone();
                                let delete_id = vehicle.id.clone();

                                view! {
                                    <tr>
                                        <td>{vehicle.name.clone()}</td>
                                        <td>{match row_session {
                                            Some(active) => {
                                                let pending = active.pending_status;
                                                view! {
                                                    <select
                                                        prop:value=pending.as_str()
                                                        on:change=move |ev| {
                                                            if let Ok(parsed) = event_target_value(&ev)
                                                                .parse::<VehicleStatus>()
                                                            {
                                                                change_status(parsed);
                                                            }
                                                        }
                                                    >
                                                        {VehicleStatus::ALL
                                                            .iter()
                                                            .map(|s| view! {
                                                                <option
                                                                    value=s.as_str()
                                                                    selected={*s == pending}
                                                                >
                                                                    {s.label()}
                                                                </option>
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </select>
                                                }.into_any()
                                            }
                                            // display cell shows the wire token; capitalized
                                            // labels are only for the selector options
                                            None => view! { {vehicle.status.as_str()} }.into_any(),
                                        }}</td>
                                        <td>{vehicle.formatted_created_at()}</td>
                                        <td class="row-actions">
                                            <button
                                                class="icon"
                                                title="Edit status"
                                                on:click=move |_| {
                                                    set_session.set(Some(EditSession::begin(&edit_source)))
                                                }
                                            >
                                                "\u{270F}"
                                            </button>
                                            <button
                                                class="icon"
                                                title="Delete"
                                                on:click=move |_| delete_vehicle(delete_id.clone())
                                            >
                                                "\u{1F5D1}"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            }.into_any()
        }}
    }
}
