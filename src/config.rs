use std::time::Duration;

pub const TIMES_ENDPOINT: &str = "/api/times";
pub const BOOK_ENDPOINT: &str = "/api/book";

/// How long transient error/success messages stay visible.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(5000);

/// How long a booked card fades out before it is removed from the list.
pub const FADE_OUT_DELAY: Duration = Duration::from_millis(1000);

/// Background refresh of the slot catalog.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(300);

pub const TRUCK_ICON: &str = "\u{1F69A}";
pub const SUV_ICON: &str = "\u{1F699}";
pub const CAR_ICON: &str = "\u{1F697}";
