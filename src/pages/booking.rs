use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::booking::controller::{BookingController, FeedbackKind};
use crate::config::{FADE_OUT_DELAY, FEEDBACK_DELAY, REFRESH_INTERVAL};
use crate::data::api;
use crate::data::booking::{BookingForm, DateRange};
use crate::pages::booking_modal::BookingModal;
use crate::pages::slot_card::{SlotCard, SlotCardProps};

/// Arms the auto-clear timer for whatever message is currently showing.
/// The sequence number keeps a stale timer from dismissing a newer message.
fn schedule_feedback_clear(controller: RwSignal<BookingController>) {
    let Some(seq) = controller.with_untracked(|c| c.feedback().map(|f| f.seq)) else {
        return;
    };
    set_timeout(
        move || controller.update(|c| c.clear_feedback(seq)),
        FEEDBACK_DELAY,
    );
}

#[component]
pub fn BookingPage() -> impl IntoView {
    let controller = RwSignal::new(BookingController::new());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let vehicle = RwSignal::new(String::new());
    let service_type = RwSignal::new(String::new());
    let name_input: NodeRef<html::Input> = NodeRef::new();

    let clear_form = move || {
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        vehicle.set(String::new());
        service_type.set(String::new());
    };

    let fetch_times = move || {
        controller.update(|c| c.begin_load());
        leptos::task::spawn_local(async move {
            let result = api::fetch_times().await;
            controller.update(|c| c.finish_load(result));
            schedule_feedback_clear(controller);
        });
    };

    #[cfg(not(feature = "ssr"))]
    fetch_times();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let handle = set_interval_with_handle(move || fetch_times(), REFRESH_INTERVAL)
            .expect("failed to set interval");
        on_cleanup(move || {
            handle.clear();
        });
    });

    let handle_book = move |slot_id: String| {
        let opened = controller
            .try_update(|c| c.open_modal(&slot_id))
            .unwrap_or(false);
        if opened {
            set_timeout(
                move || {
                    if let Some(input) = name_input.get_untracked() {
                        let _ = input.focus();
                    }
                },
                Duration::from_millis(0),
            );
        }
    };

    let handle_close = move |_: ()| {
        controller.update(|c| c.close_modal());
        clear_form();
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = BookingForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            vehicle: vehicle.get_untracked(),
            service_type: service_type.get_untracked(),
        };
        let Some(request) = controller
            .try_update(|c| c.begin_submit(&form))
            .flatten()
        else {
            schedule_feedback_clear(controller);
            return;
        };
        let slot_id = request.timeslot_id.clone();
        leptos::task::spawn_local(async move {
            let result = api::submit_booking(&request).await;
            let confirmed = controller
                .try_update(|c| c.finish_submit(&slot_id, result))
                .unwrap_or(false);
            if confirmed {
                clear_form();
                set_timeout(
                    move || controller.update(|c| c.remove_faded_slot()),
                    FADE_OUT_DELAY,
                );
                set_timeout(move || fetch_times(), FEEDBACK_DELAY);
            }
            schedule_feedback_clear(controller);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold text-gray-800">"Book a Tire Change"</h2>
            </div>

            <div class="mb-6 flex flex-wrap gap-4 items-end">
                <div class="flex flex-col">
                    <label for="vehicle-type-filter" class="text-sm font-medium text-gray-700 mb-1">
                        "Vehicle Type:"
                    </label>
                    <select
                        id="vehicle-type-filter"
                        class="px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || controller.with(|c| c.criteria().vehicle_type.clone())
                        on:change=move |ev| {
                            controller.update(|c| c.set_vehicle_filter(event_target_value(&ev)))
                        }
                    >
                        <option value="all">"All Vehicle Types"</option>
                        <option value="Car">"Car"</option>
                        <option value="SUV">"SUV"</option>
                        <option value="Truck">"Truck"</option>
                    </select>
                </div>

                <div class="flex flex-col">
                    <label for="location-filter" class="text-sm font-medium text-gray-700 mb-1">
                        "Location:"
                    </label>
                    <select
                        id="location-filter"
                        class="px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || controller.with(|c| c.criteria().location.clone())
                        on:change=move |ev| {
                            controller.update(|c| c.set_location_filter(event_target_value(&ev)))
                        }
                    >
                        {move || controller.with(|c| {
                            c.locations()
                                .iter()
                                .map(|location| {
                                    let label = if location == "all" {
                                        "All Locations".to_string()
                                    } else {
                                        location.clone()
                                    };
                                    view! { <option value=location.clone()>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        })}
                    </select>
                </div>

                <div class="flex flex-col">
                    <label for="date-range-filter" class="text-sm font-medium text-gray-700 mb-1">
                        "Date:"
                    </label>
                    <select
                        id="date-range-filter"
                        class="px-3 py-2 border border-gray-300 rounded-md"
                        prop:value=move || controller.with(|c| c.criteria().date_range.as_str())
                        on:change=move |ev| {
                            controller.update(|c| {
                                c.set_date_filter(DateRange::parse(&event_target_value(&ev)))
                            })
                        }
                    >
                        <option value="all">"All Dates"</option>
                        <option value="today">"Today"</option>
                        <option value="tomorrow">"Tomorrow"</option>
                        <option value="week">"Next 7 Days"</option>
                    </select>
                </div>
            </div>

            {move || {
                if controller.with(|c| c.is_loading() || c.is_submitting()) {
                    view! {
                        <div id="loading" class="text-sm text-gray-500 mb-4">"Loading..."</div>
                    }.into_any()
                } else {
                    view! { <div class="hidden"></div> }.into_any()
                }
            }}

            {move || match controller.with(|c| c.feedback().cloned()) {
                Some(feedback) => {
                    let class = match feedback.kind {
                        FeedbackKind::Error => {
                            "mb-4 p-3 rounded-md bg-red-50 border border-red-200 text-sm text-red-700"
                        }
                        FeedbackKind::Success => {
                            "mb-4 p-3 rounded-md bg-green-50 border border-green-200 text-sm text-green-700"
                        }
                    };
                    view! { <div class=class>{feedback.text}</div> }.into_any()
                }
                None => view! { <div class="hidden"></div> }.into_any(),
            }}

            <div id="times-container">
                {move || {
                    let (slots, fading) = controller.with(|c| {
                        (c.slots().to_vec(), c.fading_slot().map(|s| s.to_string()))
                    });
                    if slots.is_empty() {
                        view! {
                            <p class="text-gray-500">
                                "No available times match your filters. Please try different criteria."
                            </p>
                        }.into_any()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 gap-4">
                                {slots
                                    .into_iter()
                                    .map(|slot| {
                                        let fading = fading.as_deref() == Some(slot.id.as_str());
                                        SlotCard(
                                            SlotCardProps::builder()
                                                .slot(slot)
                                                .fading(fading)
                                                .on_book(Callback::new(handle_book))
                                                .build(),
                                        )
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            <BookingModal
                controller=controller
                name=name
                email=email
                phone=phone
                vehicle=vehicle
                service_type=service_type
                name_input=name_input
                on_close=Callback::new(handle_close)
                on_submit=Callback::new(handle_submit)
            />
        </div>
    }
}
