use chrono::Local;

use tire_booking::booking::controller::{BookingController, FeedbackKind};
use tire_booking::data::booking::{BookingForm, BookingResult, TimeSlot};

fn downtown_slot() -> TimeSlot {
    TimeSlot {
        id: "1".to_string(),
        time: format!("{}T10:00:00", Local::now().date_naive()),
        location: "Downtown".to_string(),
        vehicle_types: vec!["Car".to_string(), "SUV".to_string()],
    }
}

fn john_doe() -> BookingForm {
    BookingForm {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "+372 5656 0978".to_string(),
        vehicle: "Toyota Corolla 2019".to_string(),
        service_type: "Tire Change".to_string(),
    }
}

/// The full happy path: fetch a catalog, pick the slot, submit a valid form
/// against a successful booking response, and watch the slot disappear.
#[test]
fn booking_a_slot_end_to_end() {
    let mut controller = BookingController::new();

    // Initial load.
    controller.begin_load();
    controller.finish_load(Ok(vec![downtown_slot()]));
    assert_eq!(controller.slots().len(), 1);
    assert_eq!(controller.locations(), &["all", "Downtown"]);

    // Select the slot; the modal shows the formatted summary.
    assert!(controller.open_modal("1"));
    let details = controller.modal().unwrap().details.clone();
    assert_eq!(details.location, "Downtown");
    assert_eq!(details.vehicle_types, "Car, SUV");
    assert_eq!(details.time, "10:00 AM");

    // Submission hands back exactly one request to POST; a second attempt
    // while it is in flight is refused.
    let mut posted = Vec::new();
    if let Some(request) = controller.begin_submit(&john_doe()) {
        posted.push(serde_json::to_string(&request).unwrap());
    }
    if let Some(request) = controller.begin_submit(&john_doe()) {
        posted.push(serde_json::to_string(&request).unwrap());
    }
    assert_eq!(posted.len(), 1, "exactly one POST must be issued");
    let body = &posted[0];
    assert!(body.contains(r#""name":"John Doe""#), "got {body}");
    assert!(body.contains(r#""timeslotId":"1""#), "got {body}");
    assert!(body.contains(r#""location":"Downtown""#), "got {body}");
    assert!(body.contains(r#""serviceType":"Tire Change""#), "got {body}");

    // Server confirms the booking.
    let confirmed = controller.finish_submit(
        "1",
        Ok(BookingResult {
            success: true,
            booking_id: Some("123".to_string()),
            message: Some("Booking confirmed.".to_string()),
            error: None,
        }),
    );
    assert!(confirmed);
    assert!(controller.modal().is_none(), "modal closes on success");

    let feedback = controller.feedback().expect("success feedback");
    assert_eq!(feedback.kind, FeedbackKind::Success);
    assert!(feedback.text.contains("123"), "got {:?}", feedback.text);
    assert!(feedback.text.contains("Booking confirmed."));

    // The booked card fades, then gets removed from the visible list.
    assert_eq!(controller.fading_slot(), Some("1"));
    controller.remove_faded_slot();
    assert!(controller.slots().is_empty());

    // The post-booking refresh lands a fresh snapshot without the slot.
    controller.begin_load();
    controller.finish_load(Ok(vec![]));
    assert!(controller.slots().is_empty());
    assert!(!controller.is_loading());
}

/// A rejected booking keeps the modal (and the user's form) available for a
/// retry, and a later attempt can succeed.
#[test]
fn rejected_booking_can_be_retried() {
    let mut controller = BookingController::new();
    controller.finish_load(Ok(vec![downtown_slot()]));
    controller.open_modal("1");

    controller.begin_submit(&john_doe()).expect("first request");
    let confirmed = controller.finish_submit(
        "1",
        Ok(BookingResult {
            success: false,
            message: Some("Slot no longer available".to_string()),
            ..Default::default()
        }),
    );
    assert!(!confirmed);
    assert!(controller.modal().is_some());
    assert_eq!(
        controller.feedback().unwrap().text,
        "Slot no longer available"
    );

    // The guard is released, so the user may try again.
    let retry = controller.begin_submit(&john_doe());
    assert!(retry.is_some());
}
