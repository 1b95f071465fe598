pub mod booking;
pub mod booking_modal;
pub mod slot_card;
