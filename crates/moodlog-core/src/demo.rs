//! Sample journal for first-run and demo mode.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::entry::{MoodEntry, Tag};

const DEMO_USER_ID: &str = "demo-user";

/// (mood, energy, note, mood name, tag name, tag category), newest first.
const DEMO_JOURNAL: [(i32, i32, &str, &str, &str, &str); 7] = [
    (8, 7, "Had a productive day at work", "happy", "work", "activity"),
    (6, 5, "Rainy weather, stayed indoors", "calm", "weather", "weather"),
    (9, 8, "Great workout and meditation session", "excited", "exercise", "activity"),
    (4, 3, "Feeling tired after a long day", "tired", "work", "activity"),
    (7, 6, "Met with friends for dinner", "happy", "social", "social"),
    (5, 4, "Anxious about upcoming presentation", "anxious", "work", "activity"),
    (8, 7, "Relaxing weekend at home", "calm", "home", "location"),
];

/// A week of sample entries, one per day, the newest stamped at `now`.
///
/// `zone` is only used for the display `date` label.
pub fn demo_entries<Tz: TimeZone>(now: DateTime<Utc>, zone: &Tz) -> Vec<MoodEntry>
where
    Tz::Offset: fmt::Display,
{
    DEMO_JOURNAL
        .iter()
        .enumerate()
        .map(|(i, &(mood, energy, note, mood_name, tag_name, category))| {
            let id = (i + 1).to_string();
            let mut entry = MoodEntry {
                id: id.clone(),
                mood,
                energy,
                note: Some(note.to_string()),
                mood_name: Some(mood_name.to_string()),
                tags: vec![Tag {
                    id,
                    name: tag_name.to_string(),
                    category: category.to_string(),
                    user_id: DEMO_USER_ID.to_string(),
                    created_at: Some(now),
                }],
                created_at: now - Duration::days(i as i64),
                date: None,
            };
            entry.date = Some(entry.display_date(zone));
            entry
        })
        .collect()
}
