use crate::config::{CAR_ICON, SUV_ICON, TRUCK_ICON};

/// Representative icon for a slot's supported vehicle categories.
/// Priority is Truck > SUV > Car; the car icon is also the fallback for
/// categories the widget does not know about.
pub fn vehicle_icon(vehicle_types: &[String]) -> &'static str {
    if vehicle_types.iter().any(|v| v == "Truck") {
        TRUCK_ICON
    } else if vehicle_types.iter().any(|v| v == "SUV") {
        SUV_ICON
    } else {
        CAR_ICON
    }
}
