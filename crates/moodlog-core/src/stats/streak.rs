//! Day-based logging streak.
//!
//! A streak is the number of consecutive calendar days, ending today or
//! yesterday, that each hold at least one entry. Yesterday counts as the
//! anchor when nothing has been logged yet today, so the streak survives
//! until the day is over.
//!
//! The walk over the history is a small state machine: each entry either
//! counts a new day, is skipped (same day again, or later than the
//! cursor), or breaks the chain on a gap.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::entry::MoodEntry;

/// Outcome of feeding one entry's calendar day to the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakStep {
    /// First entry on the cursor day; streak grows and the cursor moves back.
    Count,
    /// Day already counted, or later than the cursor.
    Skip,
    /// Entry is older than the cursor day: a day was missed.
    Break,
}

/// Cursor-and-visited-set walker over calendar days, newest first.
#[derive(Debug, Clone)]
pub struct StreakWalker {
    cursor: Option<NaiveDate>,
    counted: HashSet<NaiveDate>,
    streak: u32,
}

impl StreakWalker {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            cursor: Some(anchor),
            counted: HashSet::new(),
            streak: 0,
        }
    }

    /// Feed the calendar day of the next entry.
    pub fn step(&mut self, day: NaiveDate) -> StreakStep {
        let Some(cursor) = self.cursor else {
            return StreakStep::Break;
        };

        let diff = (cursor - day).num_days();
        match diff.cmp(&0) {
            Ordering::Equal if !self.counted.contains(&day) => {
                self.counted.insert(day);
                self.streak += 1;
                self.cursor = cursor.pred_opt();
                StreakStep::Count
            }
            // Already-counted day, or a same-day entry scanned after the
            // cursor moved past it. Neither is a gap.
            Ordering::Equal | Ordering::Less => StreakStep::Skip,
            Ordering::Greater => StreakStep::Break,
        }
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }
}

/// Pick the day the streak walk starts from: today if anything was logged
/// today, else yesterday if anything was logged yesterday.
pub fn anchor_day<Tz: TimeZone>(entries: &[MoodEntry], now: &DateTime<Tz>) -> Option<NaiveDate> {
    let zone = now.timezone();
    let today = now.date_naive();
    let logged_on = |day: NaiveDate| entries.iter().any(|e| e.calendar_day(&zone) == day);

    if logged_on(today) {
        return Some(today);
    }
    today.pred_opt().filter(|&yesterday| logged_on(yesterday))
}

/// Current streak for `entries` (newest first) at `now`.
///
/// Calendar days are taken in `now`'s timezone. Returns 0 when nothing was
/// logged today or yesterday.
pub fn current_streak<Tz: TimeZone>(entries: &[MoodEntry], now: &DateTime<Tz>) -> u32 {
    let Some(anchor) = anchor_day(entries, now) else {
        tracing::debug!("No entry today or yesterday, streak is 0");
        return 0;
    };

    let zone = now.timezone();
    let mut walker = StreakWalker::new(anchor);

    for entry in entries {
        let day = entry.calendar_day(&zone);
        let step = walker.step(day);
        tracing::trace!(entry_id = %entry.id, %day, ?step, "Streak step");
        if step == StreakStep::Break {
            break;
        }
    }

    tracing::debug!(%anchor, streak = walker.streak(), "Computed streak");
    walker.streak()
}
