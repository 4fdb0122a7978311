//! Mood statistics.
//!
//! Everything here is a pure function of an entry history and the current
//! instant: normalization and ordering, averages and extremes, and the
//! day-based logging streak. Nothing is cached or persisted; callers
//! recompute whenever the history changes.

mod aggregate;
mod normalize;
mod streak;

pub use aggregate::{aggregate, Aggregate};
pub use normalize::{normalize, Normalized};
pub use streak::{anchor_day, current_streak, StreakStep, StreakWalker};

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::entry::MoodEntry;

/// Derived statistics for a mood history.
///
/// The extreme entries borrow from the history they were computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats<'a> {
    pub average_mood: f64,
    pub average_energy: f64,
    pub total_entries: usize,
    pub current_streak: u32,
    pub highest_mood_entry: Option<&'a MoodEntry>,
    pub lowest_mood_entry: Option<&'a MoodEntry>,
}

impl<'a> Stats<'a> {
    /// Compute stats for `entries` (newest first) at `now`.
    pub fn compute<Tz: TimeZone>(entries: &'a [MoodEntry], now: &DateTime<Tz>) -> Self {
        let Aggregate {
            average_mood,
            average_energy,
            total_entries,
            highest_mood_entry,
            lowest_mood_entry,
        } = aggregate(entries);

        let current_streak = if entries.is_empty() {
            0
        } else {
            current_streak(entries, now)
        };

        Self {
            average_mood,
            average_energy,
            total_entries,
            current_streak,
            highest_mood_entry,
            lowest_mood_entry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_compute_empty() {
        let stats = Stats::compute(&[], &Utc::now());
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_compute_combines_aggregate_and_streak() {
        let now = Utc::now();
        let entries: Vec<MoodEntry> = [(8, 7, 0), (6, 5, 1), (9, 8, 2)]
            .iter()
            .map(|&(mood, energy, days_ago)| MoodEntry {
                id: format!("d{days_ago}"),
                mood,
                energy,
                note: None,
                mood_name: None,
                tags: vec![],
                created_at: now - Duration::days(days_ago),
                date: None,
            })
            .collect();

        let stats = Stats::compute(&entries, &now);
        assert_eq!(stats.average_mood, 7.7);
        assert_eq!(stats.average_energy, 6.7);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.current_streak, 3);
        assert_eq!(stats.highest_mood_entry.map(|e| e.id.as_str()), Some("d2"));
        assert_eq!(stats.lowest_mood_entry.map(|e| e.id.as_str()), Some("d1"));
    }
}
