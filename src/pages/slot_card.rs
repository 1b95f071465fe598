use leptos::prelude::*;

use crate::data::booking::TimeSlot;
use crate::utils::date::{format_date_time, DateFormat};
use crate::utils::vehicle::vehicle_icon;

#[component]
pub fn SlotCard(slot: TimeSlot, fading: bool, on_book: Callback<String>) -> impl IntoView {
    let slot_id = slot.id.clone();
    let formatted_date = format_date_time(&slot.time, DateFormat::FullDate);
    let formatted_time = format_date_time(&slot.time, DateFormat::ShortTime);
    let icon = vehicle_icon(&slot.vehicle_types);
    let vehicle_types_text = slot.vehicle_types.join(", ");
    let badge: String = slot
        .location
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase();

    let card_class = if fading {
        "time-card bg-white border border-gray-200 rounded-lg shadow-sm p-4 opacity-0 transition-opacity duration-1000"
    } else {
        "time-card bg-white border border-gray-200 rounded-lg shadow-sm p-4 transition-opacity duration-1000"
    };

    view! {
        <div class=card_class data-id=slot.id.clone()>
            <h3 class="text-lg font-semibold text-gray-800 mb-2">
                {format!("{icon} {formatted_date}")}
            </h3>
            <p class="text-sm text-gray-600">"Time: " {formatted_time}</p>
            <p class="text-sm text-gray-600">"Vehicle Types: " {vehicle_types_text}</p>
            <p class="text-sm text-gray-600">
                "Location: " {slot.location.clone()} " "
                <span class="location-badge inline-block px-1.5 py-0.5 bg-blue-100 text-blue-800 rounded text-xs font-medium">
                    {badge}
                </span>
            </p>
            <button
                class="book-button mt-3 px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-colors"
                on:click=move |_| on_book.run(slot_id.clone())
            >
                "Book This Slot"
            </button>
        </div>
    }
}
