pub mod controller;
pub mod validate;
