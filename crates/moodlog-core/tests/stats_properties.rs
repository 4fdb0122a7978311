//! Property tests for mood statistics.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use moodlog_core::{aggregate, current_streak, normalize, RawMoodEntry};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// (mood, energy, minutes before now)
fn raw_entries() -> impl Strategy<Value = Vec<(i32, i32, i64)>> {
    prop::collection::vec((1..=10i32, 1..=10i32, 0..(20 * 24 * 60i64)), 0..40)
}

fn to_raw(specs: &[(i32, i32, i64)]) -> Vec<RawMoodEntry> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &(mood, energy, minutes))| RawMoodEntry {
            id: i.to_string(),
            mood: Some(mood),
            energy: Some(energy),
            created_at: Some((now() - Duration::minutes(minutes)).to_rfc3339()),
            ..Default::default()
        })
        .collect()
}

/// Consecutive logged days counted back from today (or yesterday).
fn reference_streak(specs: &[(i32, i32, i64)]) -> u32 {
    let days: BTreeSet<NaiveDate> = specs
        .iter()
        .map(|&(_, _, minutes)| (now() - Duration::minutes(minutes)).date_naive())
        .collect();

    let today = now().date_naive();
    let mut cursor = if days.contains(&today) {
        today
    } else {
        today.pred_opt().unwrap()
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor = cursor.pred_opt().unwrap();
    }
    streak
}

proptest! {
    #[test]
    fn averages_stay_in_scale(specs in raw_entries()) {
        let normalized = normalize(to_raw(&specs), &now());
        let agg = aggregate(&normalized.entries);

        if specs.is_empty() {
            prop_assert_eq!(agg.average_mood, 0.0);
            prop_assert_eq!(agg.average_energy, 0.0);
        } else {
            prop_assert!((1.0..=10.0).contains(&agg.average_mood));
            prop_assert!((1.0..=10.0).contains(&agg.average_energy));
        }
        prop_assert_eq!(agg.total_entries, specs.len());
    }

    #[test]
    fn extremes_bound_every_entry(specs in raw_entries()) {
        let normalized = normalize(to_raw(&specs), &now());
        let agg = aggregate(&normalized.entries);

        if let (Some(high), Some(low)) = (agg.highest_mood_entry, agg.lowest_mood_entry) {
            for entry in &normalized.entries {
                prop_assert!(entry.mood <= high.mood);
                prop_assert!(entry.mood >= low.mood);
            }
        }
    }

    #[test]
    fn stats_are_idempotent(specs in raw_entries()) {
        let normalized = normalize(to_raw(&specs), &now());
        prop_assert_eq!(aggregate(&normalized.entries), aggregate(&normalized.entries));
        prop_assert_eq!(
            current_streak(&normalized.entries, &now()),
            current_streak(&normalized.entries, &now())
        );
    }

    #[test]
    fn streak_matches_consecutive_day_count(specs in raw_entries()) {
        let normalized = normalize(to_raw(&specs), &now());
        prop_assert_eq!(current_streak(&normalized.entries, &now()), reference_streak(&specs));
    }

    #[test]
    fn streak_ignores_input_order(
        shuffled in raw_entries().prop_flat_map(|specs| {
            let original = specs.clone();
            Just(specs).prop_shuffle().prop_map(move |s| (original.clone(), s))
        })
    ) {
        let (original, reordered) = shuffled;
        let a = normalize(to_raw(&original), &now());
        let b = normalize(to_raw(&reordered), &now());
        prop_assert_eq!(current_streak(&a.entries, &now()), current_streak(&b.entries, &now()));
        prop_assert_eq!(aggregate(&a.entries).average_mood, aggregate(&b.entries).average_mood);
    }
}
