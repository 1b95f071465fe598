use chrono::{Days, Local, NaiveDate};

use crate::data::booking::{DateRange, FilterCriteria, TimeSlot};
use crate::utils::date::slot_day;

/// In-memory store of the latest slot snapshot plus the location filter
/// options derived from it. The catalog never mutates its snapshot while
/// filtering; `filter` hands out copies in snapshot order.
#[derive(Debug, Clone, Default)]
pub struct TimeCatalog {
    slots: Vec<TimeSlot>,
    locations: Vec<String>,
}

impl TimeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the full snapshot and recomputes the distinct,
    /// alphabetically-sorted location options, with the synthetic "all"
    /// entry prepended.
    pub fn set_all(&mut self, slots: Vec<TimeSlot>) {
        let mut locations: Vec<String> = slots.iter().map(|slot| slot.location.clone()).collect();
        locations.sort();
        locations.dedup();
        locations.insert(0, "all".to_string());

        self.slots = slots;
        self.locations = locations;
    }

    /// Drops one slot from the snapshot after its booking was confirmed.
    /// Location options stay as they are until the next refresh.
    pub fn remove(&mut self, id: &str) {
        self.slots.retain(|slot| slot.id != id);
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn get(&self, id: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// Stable filter: the subset of the snapshot matching all three active
    /// predicates, in snapshot order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<TimeSlot> {
        self.filter_at(criteria, Local::now().date_naive())
    }

    /// Same as [`filter`](Self::filter) with an explicit reference day, so
    /// the date-range predicates can be pinned in tests.
    pub fn filter_at(&self, criteria: &FilterCriteria, today: NaiveDate) -> Vec<TimeSlot> {
        self.slots
            .iter()
            .filter(|slot| {
                if criteria.vehicle_type != "all"
                    && !slot.vehicle_types.contains(&criteria.vehicle_type)
                {
                    return false;
                }
                if criteria.location != "all" && slot.location != criteria.location {
                    return false;
                }
                in_date_range(&slot.time, criteria.date_range, today)
            })
            .cloned()
            .collect()
    }
}

/// Calendar-day predicate for the date-range filter. Slots whose time cannot
/// be parsed only ever match `All`.
fn in_date_range(time: &str, range: DateRange, today: NaiveDate) -> bool {
    if range == DateRange::All {
        return true;
    }
    let Some(day) = slot_day(time) else {
        return false;
    };
    match range {
        DateRange::All => true,
        DateRange::Today => day == today,
        DateRange::Tomorrow => Some(day) == today.checked_add_days(Days::new(1)),
        DateRange::Week => {
            day >= today
                && today
                    .checked_add_days(Days::new(7))
                    .is_some_and(|end| day <= end)
        }
    }
}
