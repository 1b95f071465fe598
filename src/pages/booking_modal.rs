use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::booking::controller::BookingController;

#[component]
pub fn BookingModal(
    controller: RwSignal<BookingController>,
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    vehicle: RwSignal<String>,
    service_type: RwSignal<String>,
    name_input: NodeRef<html::Input>,
    on_close: Callback<()>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let overlay_class = move || {
        if controller.with(|c| c.modal().is_some()) {
            "visible fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"
        } else {
            "hidden"
        }
    };

    view! {
        <div id="booking-modal" class=overlay_class>
            <div class="bg-white rounded-lg shadow-xl max-w-md w-full p-6 relative">
                <button
                    id="close-modal"
                    class="absolute top-3 right-3 text-gray-400 hover:text-gray-600 text-xl"
                    on:click=move |_| on_close.run(())
                >
                    "\u{00d7}"
                </button>

                <h2 class="text-xl font-bold text-gray-800 mb-4">"Book Your Appointment"</h2>

                <div id="booking-appointment-details" class="mb-4 p-3 bg-gray-50 rounded-md text-sm text-gray-700">
                    {move || match controller.with(|c| c.modal().map(|p| p.details.clone())) {
                        Some(details) => view! {
                            <div>
                                <p><strong>"Date: "</strong>{details.date}</p>
                                <p><strong>"Time: "</strong>{details.time}</p>
                                <p><strong>"Location: "</strong>{details.location}</p>
                                <p><strong>"Supported Vehicles: "</strong>{details.vehicle_types}</p>
                            </div>
                        }.into_any(),
                        None => view! { <div class="hidden"></div> }.into_any(),
                    }}
                </div>

                <form id="booking-form" on:submit=move |ev| on_submit.run(ev)>
                    <div class="flex flex-col gap-3">
                        <div class="flex flex-col">
                            <label for="booking-name" class="text-sm font-medium text-gray-700 mb-1">"Name:"</label>
                            <input
                                id="booking-name"
                                name="name"
                                type="text"
                                class="px-3 py-2 border border-gray-300 rounded-md"
                                node_ref=name_input
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="flex flex-col">
                            <label for="booking-email" class="text-sm font-medium text-gray-700 mb-1">"Email:"</label>
                            <input
                                id="booking-email"
                                name="email"
                                type="text"
                                class="px-3 py-2 border border-gray-300 rounded-md"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="flex flex-col">
                            <label for="booking-phone" class="text-sm font-medium text-gray-700 mb-1">"Phone (optional):"</label>
                            <input
                                id="booking-phone"
                                name="phone"
                                type="text"
                                placeholder="e.g., +372 5656 0978"
                                class="px-3 py-2 border border-gray-300 rounded-md"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="flex flex-col">
                            <label for="booking-vehicle" class="text-sm font-medium text-gray-700 mb-1">"Vehicle:"</label>
                            <input
                                id="booking-vehicle"
                                name="vehicle"
                                type="text"
                                placeholder="e.g., Toyota Corolla 2019"
                                class="px-3 py-2 border border-gray-300 rounded-md"
                                prop:value=move || vehicle.get()
                                on:input=move |ev| vehicle.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="flex flex-col">
                            <label for="booking-service-type" class="text-sm font-medium text-gray-700 mb-1">"Service:"</label>
                            <select
                                id="booking-service-type"
                                name="serviceType"
                                class="px-3 py-2 border border-gray-300 rounded-md"
                                prop:value=move || service_type.get()
                                on:change=move |ev| service_type.set(event_target_value(&ev))
                            >
                                <option value="">"Select a service"</option>
                                <option value="Tire Change">"Tire Change"</option>
                                <option value="Tire Repair">"Tire Repair"</option>
                                <option value="Tire Balancing">"Tire Balancing"</option>
                            </select>
                        </div>

                        <button
                            type="submit"
                            class="mt-2 px-4 py-2 bg-green-600 text-white rounded-md hover:bg-green-700 focus:outline-none focus:ring-2 focus:ring-green-500 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                            prop:disabled=move || controller.with(|c| c.is_submitting())
                        >
                            {move || if controller.with(|c| c.is_submitting()) { "Booking..." } else { "Confirm Booking" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
