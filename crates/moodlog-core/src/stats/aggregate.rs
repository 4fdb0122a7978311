//! Averages and extremes over an ordered entry history.

use std::cmp::Reverse;

use serde::Serialize;

use crate::entry::MoodEntry;

/// Summary figures for a batch of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregate<'a> {
    pub average_mood: f64,
    pub average_energy: f64,
    pub total_entries: usize,
    pub highest_mood_entry: Option<&'a MoodEntry>,
    pub lowest_mood_entry: Option<&'a MoodEntry>,
}

/// Compute averages, count and mood extremes.
///
/// `entries` should already be in history order (newest first); ties on
/// mood resolve to the entry that appears first. An empty slice yields
/// [`Aggregate::default`].
pub fn aggregate(entries: &[MoodEntry]) -> Aggregate<'_> {
    if entries.is_empty() {
        return Aggregate::default();
    }

    let count = entries.len();
    let mood_sum: i64 = entries.iter().map(|e| i64::from(e.mood)).sum();
    let energy_sum: i64 = entries.iter().map(|e| i64::from(e.energy)).sum();

    // `min_by_key` keeps the first of equal keys, matching a stable sort
    let highest = entries.iter().min_by_key(|e| Reverse(e.mood));
    let lowest = entries.iter().min_by_key(|e| e.mood);

    Aggregate {
        average_mood: round_one_decimal(mood_sum, count),
        average_energy: round_one_decimal(energy_sum, count),
        total_entries: count,
        highest_mood_entry: highest,
        lowest_mood_entry: lowest,
    }
}

/// `sum / count` rounded half-up to one decimal place.
///
/// Works on integers so 7.25 and friends round the same way regardless of
/// binary float representation.
fn round_one_decimal(sum: i64, count: usize) -> f64 {
    let count = count as i64;
    let tenths = (20 * sum + count).div_euclid(2 * count);
    tenths as f64 / 10.0
}
