//! Caller-owned memo of full calendars, keyed by club count.

use crate::{double_round_robin, ClubCount, Pairing, ScheduleError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

/// Calendar rounds shared between lookups.
pub type Calendar = Arc<Vec<Vec<Pairing>>>;

/// Bounded memo of calendars. Once `capacity` sizes are cached, further
/// sizes are computed on every call instead of being stored.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    capacity: usize,
    calendars: BTreeMap<u32, Calendar>,
}

impl ScheduleCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            calendars: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }

    /// Home-and-away calendar for `count` clubs.
    pub fn calendar(&mut self, count: ClubCount) -> Calendar {
        if let Some(found) = self.calendars.get(&count.get()) {
            return Arc::clone(found);
        }
        let calendar: Calendar = Arc::new(double_round_robin(count));
        if self.calendars.len() < self.capacity {
            self.calendars.insert(count.get(), Arc::clone(&calendar));
        } else {
            warn!(clubs = count.get(), capacity = self.capacity, "schedule cache full");
        }
        calendar
    }

    /// One round of the calendar for `count` clubs.
    pub fn round(&mut self, count: ClubCount, round: u32) -> Result<Vec<Pairing>, ScheduleError> {
        let calendar = self.calendar(count);
        calendar
            .get(round as usize)
            .cloned()
            .ok_or(ScheduleError::RoundOutOfRange {
                round,
                rounds: count.rounds(),
            })
    }
}
