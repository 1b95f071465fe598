pub mod api;
pub mod booking;
pub mod catalog;
