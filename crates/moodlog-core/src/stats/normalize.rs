//! Entry normalization.
//!
//! Turns an unordered batch of raw entries into validated entries sorted
//! newest first. Entries with a missing or unreadable `created_at` are
//! stamped with the current instant; entries missing `mood` or `energy`
//! are excluded and counted.

use chrono::{DateTime, TimeZone, Utc};

use crate::entry::{MoodEntry, RawMoodEntry};

/// Result of normalizing a batch of raw entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// Valid entries, newest first.
    pub entries: Vec<MoodEntry>,
    /// Records dropped for missing `mood`/`energy`.
    pub excluded: usize,
    /// Records whose timestamp was replaced with now.
    pub restamped: usize,
}

/// Validate and order `raw` by `created_at`, newest first.
///
/// `now` provides both the fallback instant and the reporting timezone for
/// offset-less timestamps. The sort is stable: entries sharing an instant
/// keep their input order.
pub fn normalize<Tz: TimeZone>(raw: Vec<RawMoodEntry>, now: &DateTime<Tz>) -> Normalized {
    let zone = now.timezone();
    let fallback = now.with_timezone(&Utc);

    let mut normalized = Normalized::default();
    normalized.entries.reserve(raw.len());

    for record in raw {
        let id = record.id.clone();

        match record.into_entry(fallback, &zone) {
            Ok((entry, restamped)) => {
                if restamped {
                    normalized.restamped += 1;
                    tracing::warn!(entry_id = %id, "Entry has no usable timestamp, using current time");
                }
                normalized.entries.push(entry);
            }
            Err(missing) => {
                normalized.excluded += 1;
                tracing::warn!(entry_id = %id, field = %missing, "Excluding entry with missing field");
            }
        }
    }

    // `sort_by` is stable
    normalized
        .entries
        .sort_by(|a, b| b.created_at.cmp(&a.created_at));

    normalized
}
