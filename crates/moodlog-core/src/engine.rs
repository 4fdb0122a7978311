//! Mood analytics engine.
//!
//! [`MoodAnalytics`] binds a [`Clock`] and a reporting timezone to the
//! pure functions in [`crate::stats`]. It holds no mutable state, so one
//! instance can serve any number of concurrent refreshes; each call works
//! on its own snapshot.
//!
//! The zone is any [`TimeZone`]: a [`chrono::FixedOffset`] for a pinned
//! offset, or [`chrono::Local`] so calendar days follow the host's DST
//! rules for each entry's own instant.

use chrono::{DateTime, TimeZone, Utc};

use crate::clock::{Clock, SystemClock};
use crate::entry::{MoodEntry, RawMoodEntry};
use crate::source::{Decoded, EntrySource};
use crate::stats::{normalize, Normalized, Stats};

/// A normalized history plus bookkeeping about records that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodReport {
    /// Valid entries, newest first.
    pub history: Vec<MoodEntry>,
    /// Records left out of the history: undecodable elements plus entries
    /// missing `mood` or `energy`.
    pub excluded: usize,
    /// Entries whose timestamp was replaced with the current instant.
    pub restamped: usize,
}

impl MoodReport {
    /// Stats for this history as of `now`.
    ///
    /// The aggregates are fixed by the history; only the streak moves with
    /// `now`, so a stored report can be re-evaluated later.
    pub fn stats<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Stats<'_> {
        Stats::compute(&self.history, now)
    }
}

/// Stateless analytics over mood histories.
#[derive(Debug, Clone)]
pub struct MoodAnalytics<C = SystemClock, Tz = Utc> {
    clock: C,
    zone: Tz,
}

impl MoodAnalytics<SystemClock, Utc> {
    /// Wall clock, UTC calendar days.
    pub fn new() -> Self {
        Self::with_clock(SystemClock, Utc)
    }
}

impl Default for MoodAnalytics<SystemClock, Utc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, Tz: TimeZone> MoodAnalytics<C, Tz> {
    /// Create with a custom clock and reporting timezone.
    pub fn with_clock(clock: C, zone: Tz) -> Self {
        Self { clock, zone }
    }

    /// Reporting timezone used for calendar days.
    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    /// Current instant in the reporting timezone.
    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.zone)
    }

    /// Validate and order raw entries, newest first.
    pub fn normalize(&self, raw: Vec<RawMoodEntry>) -> Normalized {
        normalize(raw, &self.now())
    }

    /// Stats for an already-normalized history.
    pub fn stats<'a>(&self, history: &'a [MoodEntry]) -> Stats<'a> {
        let stats = Stats::compute(history, &self.now());
        tracing::debug!(
            total_entries = stats.total_entries,
            average_mood = stats.average_mood,
            average_energy = stats.average_energy,
            current_streak = stats.current_streak,
            "Computed mood stats"
        );
        stats
    }

    /// Normalize a decoded snapshot into a report.
    pub fn report(&self, decoded: Decoded) -> MoodReport {
        let Normalized {
            entries,
            excluded,
            restamped,
        } = self.normalize(decoded.entries);

        let excluded = excluded + decoded.rejected;
        if excluded > 0 {
            tracing::warn!(excluded, "Some records were left out of the mood history");
        }

        MoodReport {
            history: entries,
            excluded,
            restamped,
        }
    }

    /// Fetch a full snapshot from `source` and normalize it.
    ///
    /// Nothing is computed until the source has returned.
    pub fn load<S: EntrySource>(&self, source: &S) -> Result<MoodReport, S::Error> {
        let decoded = source.fetch_entries()?;
        Ok(self.report(decoded))
    }
}
