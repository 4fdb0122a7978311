//! # Moodlog Core Library
//!
//! This library provides the analytics behind the Moodlog mood journal.
//! Users log mood and energy readings with notes and tags; the core turns
//! that history into averages, extremes and a day-based logging streak.
//! The CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Entries**: raw records from any source are validated into
//!   [`MoodEntry`] values with a resolved timestamp
//! - **Stats**: pure functions over a newest-first history
//!   (normalization, aggregates, streak)
//! - **Engine**: [`MoodAnalytics`] binds an injected [`Clock`] and a
//!   reporting timezone to the stats functions
//! - **Sources**: the [`EntrySource`] trait abstracts where entries live
//! - **Storage**: TOML-based configuration
//!
//! ## Example
//!
//! ```
//! use chrono::{FixedOffset, Utc};
//! use moodlog_core::{demo_entries, FixedClock, MemorySource, MoodAnalytics, RawMoodEntry};
//!
//! let now = Utc::now();
//! let utc = FixedOffset::east_opt(0).unwrap();
//! let raw: Vec<RawMoodEntry> = demo_entries(now, &utc).into_iter().map(Into::into).collect();
//!
//! let analytics = MoodAnalytics::with_clock(FixedClock::new(now), utc);
//! let report = analytics.load(&MemorySource::new(raw)).unwrap();
//! let stats = analytics.stats(&report.history);
//!
//! assert_eq!(stats.total_entries, 7);
//! assert_eq!(stats.current_streak, 7);
//! ```

pub mod clock;
pub mod demo;
pub mod engine;
pub mod entry;
pub mod error;
pub mod source;
pub mod stats;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use demo::demo_entries;
pub use engine::{MoodAnalytics, MoodReport};
pub use entry::{parse_timestamp, MissingField, MoodEntry, RawMoodEntry, Tag};
pub use error::{ConfigError, CoreError, Result, SourceError};
pub use source::{decode_payload, Decoded, EntrySource, JsonFileSource, MemorySource};
pub use stats::{aggregate, current_streak, normalize, Aggregate, Normalized, Stats};
pub use storage::{offset_from_minutes, Config, ReportingZone};
