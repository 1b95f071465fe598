pub mod date;
pub mod vehicle;
