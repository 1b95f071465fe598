use crate::booking::validate::validate;
use crate::data::api::ApiError;
use crate::data::booking::{
    BookingForm, BookingRequest, BookingResult, DateRange, FilterCriteria, TimeSlot,
};
use crate::data::catalog::TimeCatalog;
use crate::utils::date::{format_date_time, DateFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

/// A transient status message. The sequence number lets the page's
/// auto-clear timer tell whether it is about to dismiss the message it was
/// armed for or a newer one that must stay up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
    pub seq: u64,
}

/// Human-readable summary of the slot being booked, shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDetails {
    pub date: String,
    pub time: String,
    pub location: String,
    pub vehicle_types: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBooking {
    pub slot: TimeSlot,
    pub details: AppointmentDetails,
}

/// All widget state in one place: the catalog snapshot, the active filter
/// criteria, the filtered view, and the load/modal/submit machines.
///
/// The controller does no IO itself. The page layer runs the actual fetches
/// and reports their outcomes through the `begin_*`/`finish_*` pairs, which
/// keeps every transition synchronous and directly testable.
#[derive(Debug, Clone, Default)]
pub struct BookingController {
    catalog: TimeCatalog,
    criteria: FilterCriteria,
    visible: Vec<TimeSlot>,
    load: LoadState,
    modal: Option<PendingBooking>,
    submitting: bool,
    feedback: Option<Feedback>,
    feedback_seq: u64,
    fading: Option<String>,
}

impl BookingController {
    pub fn new() -> Self {
        Self::default()
    }

    // --- load ---

    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Stores a fetched snapshot, or surfaces the failure. The filter is
    /// re-run against the new snapshot with the *current* criteria, so a
    /// filter change made while the fetch was in flight wins. The loading
    /// flag clears on both branches.
    pub fn finish_load(&mut self, result: Result<Vec<TimeSlot>, ApiError>) {
        match result {
            Ok(slots) => {
                self.catalog.set_all(slots);
                self.refilter();
                self.load = LoadState::Loaded;
            }
            Err(err) => {
                self.show_error(format!("Failed to fetch available times: {err}"));
                self.load = LoadState::Failed;
            }
        }
    }

    // --- filtering ---

    pub fn set_vehicle_filter(&mut self, vehicle_type: String) {
        self.criteria.vehicle_type = vehicle_type;
        self.refilter();
    }

    pub fn set_location_filter(&mut self, location: String) {
        self.criteria.location = location;
        self.refilter();
    }

    pub fn set_date_filter(&mut self, range: DateRange) {
        self.criteria.date_range = range;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = self.catalog.filter(&self.criteria);
    }

    // --- modal ---

    /// Opens the booking modal for one slot out of the current catalog.
    /// Returns false when the id is no longer present (already booked away).
    pub fn open_modal(&mut self, slot_id: &str) -> bool {
        let Some(slot) = self.catalog.get(slot_id).cloned() else {
            return false;
        };
        let details = AppointmentDetails {
            date: format_date_time(&slot.time, DateFormat::FullDate),
            time: format_date_time(&slot.time, DateFormat::ShortTime),
            location: slot.location.clone(),
            vehicle_types: slot.vehicle_types.join(", "),
        };
        self.modal = Some(PendingBooking { slot, details });
        true
    }

    /// Discards the pending slot selection. The page layer owns the form
    /// field signals and resets them alongside this call.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    // --- submission ---

    /// Validates the form against the pending slot and, when everything
    /// checks out, marks the controller as submitting and hands back the
    /// request to POST. Returns `None` with error feedback on validation
    /// failure, and `None` without touching anything while a submission is
    /// already in flight, so a double click cannot produce two bookings.
    pub fn begin_submit(&mut self, form: &BookingForm) -> Option<BookingRequest> {
        if self.submitting {
            return None;
        }

        let (timeslot_id, location) = match &self.modal {
            Some(pending) => (pending.slot.id.clone(), pending.slot.location.clone()),
            None => (String::new(), String::new()),
        };
        let request = BookingRequest {
            timeslot_id,
            location,
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            vehicle: form.vehicle.clone(),
            service_type: form.service_type.clone(),
        };

        let verdict = validate(&request);
        if !verdict.valid {
            self.show_error(verdict.message);
            return None;
        }

        self.submitting = true;
        Some(request)
    }

    /// Applies the outcome of the POST. Returns true when the booking was
    /// confirmed, in which case the booked slot is fading and the caller
    /// should schedule [`remove_faded_slot`](Self::remove_faded_slot) plus a
    /// catalog refresh. On any failure the modal stays open with the form
    /// intact so the user can adjust and retry.
    pub fn finish_submit(&mut self, slot_id: &str, result: Result<BookingResult, ApiError>) -> bool {
        self.submitting = false;
        match result {
            Ok(body) if body.success => {
                let booking_id = body.booking_id.unwrap_or_default();
                let message = body.message.unwrap_or_default();
                self.close_modal();
                self.show_success(format!(
                    "Booking confirmed! Your booking ID is {booking_id}. {message}"
                ));
                self.fading = Some(slot_id.to_string());
                true
            }
            Ok(body) => {
                let text = body
                    .error
                    .or(body.message)
                    .unwrap_or_else(|| "Booking failed. Please try again.".to_string());
                self.show_error(text);
                false
            }
            Err(ApiError::Status(status)) => {
                self.show_error(format!("Server error: {status}"));
                false
            }
            Err(_) => {
                self.show_error("An error occurred while processing your booking.".to_string());
                false
            }
        }
    }

    /// Removes the slot that finished fading out of the list.
    pub fn remove_faded_slot(&mut self) {
        if let Some(id) = self.fading.take() {
            self.catalog.remove(&id);
            self.refilter();
        }
    }

    // --- feedback ---

    fn show_error(&mut self, text: String) {
        self.push_feedback(FeedbackKind::Error, text);
    }

    fn show_success(&mut self, text: String) {
        self.push_feedback(FeedbackKind::Success, text);
    }

    fn push_feedback(&mut self, kind: FeedbackKind, text: String) {
        self.feedback_seq += 1;
        self.feedback = Some(Feedback {
            kind,
            text,
            seq: self.feedback_seq,
        });
    }

    /// Dismisses the current message, but only if it is still the one the
    /// timer was armed for; a newer message keeps its own full display time.
    pub fn clear_feedback(&mut self, seq: u64) {
        if self.feedback.as_ref().is_some_and(|f| f.seq == seq) {
            self.feedback = None;
        }
    }

    // --- accessors ---

    pub fn slots(&self) -> &[TimeSlot] {
        &self.visible
    }

    pub fn locations(&self) -> &[String] {
        self.catalog.locations()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn modal(&self) -> Option<&PendingBooking> {
        self.modal.as_ref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn fading_slot(&self) -> Option<&str> {
        self.fading.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, location: &str) -> TimeSlot {
        TimeSlot {
            id: id.to_string(),
            time: "2026-03-02T10:00:00".to_string(),
            location: location.to_string(),
            vehicle_types: vec!["Car".to_string()],
        }
    }

    fn loaded_controller() -> BookingController {
        let mut controller = BookingController::new();
        controller.begin_load();
        controller.finish_load(Ok(vec![slot("1", "Downtown"), slot("2", "Uptown")]));
        controller
    }

    fn valid_form() -> BookingForm {
        BookingForm {
            name: "John Doe".into(),
            email: "john@example.com".into(),
            phone: String::new(),
            vehicle: "Toyota Corolla".into(),
            service_type: "Tire Change".into(),
        }
    }

    #[test]
    fn successful_load_stores_snapshot_and_derives_locations() {
        let controller = loaded_controller();
        assert_eq!(controller.load_state(), LoadState::Loaded);
        assert!(!controller.is_loading());
        assert_eq!(controller.slots().len(), 2);
        assert_eq!(controller.locations(), &["all", "Downtown", "Uptown"]);
    }

    #[test]
    fn failed_load_surfaces_error_and_clears_loading() {
        let mut controller = BookingController::new();
        controller.begin_load();
        assert!(controller.is_loading());
        controller.finish_load(Err(ApiError::Status(500)));
        assert_eq!(controller.load_state(), LoadState::Failed);
        assert!(!controller.is_loading());
        let feedback = controller.feedback().expect("error feedback");
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert!(feedback.text.contains("Failed to fetch available times"));
    }

    #[test]
    fn failed_load_keeps_the_previous_snapshot() {
        let mut controller = loaded_controller();
        controller.begin_load();
        controller.finish_load(Err(ApiError::Transport("offline".into())));
        assert_eq!(controller.slots().len(), 2);
    }

    #[test]
    fn criteria_changed_mid_flight_apply_to_the_new_snapshot() {
        let mut controller = BookingController::new();
        controller.begin_load();
        // User narrows the filter while the fetch is still in the air.
        controller.set_location_filter("Uptown".to_string());
        controller.finish_load(Ok(vec![slot("1", "Downtown"), slot("2", "Uptown")]));
        let visible: Vec<_> = controller.slots().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(visible, ["2"]);
    }

    #[test]
    fn filter_changes_rerun_synchronously() {
        let mut controller = loaded_controller();
        controller.set_location_filter("Downtown".to_string());
        assert_eq!(controller.slots().len(), 1);
        controller.set_location_filter("all".to_string());
        assert_eq!(controller.slots().len(), 2);
        controller.set_vehicle_filter("Truck".to_string());
        assert!(controller.slots().is_empty());
    }

    #[test]
    fn open_modal_captures_slot_and_summary() {
        let mut controller = loaded_controller();
        assert!(controller.open_modal("1"));
        let pending = controller.modal().expect("modal open");
        assert_eq!(pending.slot.id, "1");
        assert_eq!(pending.details.location, "Downtown");
        assert!(pending.details.date.contains("March"));
        assert_eq!(pending.details.time, "10:00 AM");
        assert_eq!(pending.details.vehicle_types, "Car");
    }

    #[test]
    fn open_modal_for_unknown_slot_is_refused() {
        let mut controller = loaded_controller();
        assert!(!controller.open_modal("missing"));
        assert!(controller.modal().is_none());
    }

    #[test]
    fn close_modal_discards_the_pending_slot() {
        let mut controller = loaded_controller();
        controller.open_modal("1");
        controller.close_modal();
        assert!(controller.modal().is_none());
    }

    #[test]
    fn invalid_form_never_reaches_the_network() {
        let mut controller = loaded_controller();
        controller.open_modal("1");
        let request = controller.begin_submit(&BookingForm::default());
        assert!(request.is_none());
        assert!(!controller.is_submitting());
        let feedback = controller.feedback().expect("validation feedback");
        assert_eq!(feedback.kind, FeedbackKind::Error);
        assert!(feedback.text.contains("Please enter your name"));
        assert!(controller.modal().is_some());
    }

    #[test]
    fn submit_without_a_selected_slot_is_rejected_by_validation() {
        let mut controller = loaded_controller();
        let request = controller.begin_submit(&valid_form());
        assert!(request.is_none());
        let feedback = controller.feedback().expect("feedback");
        assert!(feedback.text.contains("No time slot selected"));
    }

    #[test]
    fn double_submission_is_refused_while_in_flight() {
        let mut controller = loaded_controller();
        controller.open_modal("1");
        let first = controller.begin_submit(&valid_form());
        assert!(first.is_some());
        assert!(controller.is_submitting());
        assert!(controller.begin_submit(&valid_form()).is_none());
    }

    #[test]
    fn rejected_booking_keeps_the_modal_open_with_server_text() {
        let mut controller = loaded_controller();
        controller.open_modal("1");
        controller.begin_submit(&valid_form()).expect("request");
        let confirmed = controller.finish_submit(
            "1",
            Ok(BookingResult {
                success: false,
                error: Some("Slot no longer available".into()),
                ..Default::default()
            }),
        );
        assert!(!confirmed);
        assert!(!controller.is_submitting());
        assert!(controller.modal().is_some());
        assert_eq!(
            controller.feedback().unwrap().text,
            "Slot no longer available"
        );
    }

    #[test]
    fn transport_failure_surfaces_a_generic_message() {
        let mut controller = loaded_controller();
        controller.open_modal("1");
        controller.begin_submit(&valid_form()).expect("request");
        controller.finish_submit("1", Err(ApiError::Transport("reset".into())));
        assert_eq!(
            controller.feedback().unwrap().text,
            "An error occurred while processing your booking."
        );
        assert!(controller.modal().is_some());
    }

    #[test]
    fn newer_feedback_survives_an_older_clear_timer() {
        let mut controller = BookingController::new();
        controller.finish_load(Err(ApiError::Status(500)));
        let old_seq = controller.feedback().unwrap().seq;
        controller.finish_load(Err(ApiError::Status(503)));
        controller.clear_feedback(old_seq);
        assert!(controller.feedback().is_some());
        let current_seq = controller.feedback().unwrap().seq;
        controller.clear_feedback(current_seq);
        assert!(controller.feedback().is_none());
    }
}
