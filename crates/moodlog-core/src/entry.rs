//! Mood journal data model.
//!
//! Entries travel as JSON with snake_case keys (`mood_name`, `created_at`,
//! `user_id`). camelCase spellings are accepted on input.
//!
//! Two shapes exist:
//! - [`RawMoodEntry`]: what an entry source hands over. Every field that
//!   the analytics depend on is optional so one broken record cannot
//!   poison a whole payload.
//! - [`MoodEntry`]: a validated entry with a resolved `created_at` instant.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Naive date-time layouts accepted for `created_at`, tried in order.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A user-defined label attached to mood entries.
///
/// Tags are shared between entries of the same user; an entry only holds
/// a copy of the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Free-form classification ("activity", "weather", "social", "location", ...)
    #[serde(default)]
    pub category: String,
    /// Owner of the tag
    #[serde(default, alias = "userId", alias = "ownerId", alias = "owner_id")]
    pub user_id: String,
    #[serde(
        default,
        alias = "createdAt",
        deserialize_with = "lenient_instant",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// A validated mood journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    /// Valence, 1-10
    pub mood: i32,
    /// Arousal, 1-10
    pub energy: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, alias = "moodName", skip_serializing_if = "Option::is_none")]
    pub mood_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Authoritative ordering key.
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Client-side display label. Never used for computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl MoodEntry {
    /// Calendar day of this entry in the given timezone.
    pub fn calendar_day<Tz: TimeZone>(&self, zone: &Tz) -> NaiveDate {
        self.created_at.with_timezone(zone).date_naive()
    }

    /// Short "MMM dd" label (e.g. "Apr 04") for listings.
    pub fn display_date<Tz: TimeZone>(&self, zone: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        self.created_at.with_timezone(zone).format("%b %d").to_string()
    }
}

/// An entry as delivered by an entry source, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMoodEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub mood: Option<i32>,
    #[serde(default)]
    pub energy: Option<i32>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, alias = "moodName")]
    pub mood_name: Option<String>,
    /// `null` and unreadable tags are dropped, never the entry.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<Tag>,
    /// Unparsed timestamp; may be missing or malformed. Non-string values
    /// (epoch numbers, `{"$date": ...}` objects) read as missing.
    #[serde(default, alias = "createdAt", deserialize_with = "lenient_timestamp")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A required numeric field absent from a raw entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Mood,
    Energy,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Mood => f.write_str("mood"),
            MissingField::Energy => f.write_str("energy"),
        }
    }
}

impl RawMoodEntry {
    /// Validate into a [`MoodEntry`], stamping `created_at` with `fallback`
    /// when the raw timestamp is missing or cannot be parsed.
    ///
    /// `zone` is used to interpret timestamps that carry no offset. The
    /// flag is `true` when `fallback` was used.
    pub fn into_entry<Tz: TimeZone>(
        self,
        fallback: DateTime<Utc>,
        zone: &Tz,
    ) -> Result<(MoodEntry, bool), MissingField> {
        let mood = self.mood.ok_or(MissingField::Mood)?;
        let energy = self.energy.ok_or(MissingField::Energy)?;
        let parsed = self
            .created_at
            .as_deref()
            .and_then(|raw| parse_timestamp(raw, zone));
        let restamped = parsed.is_none();

        let entry = MoodEntry {
            id: self.id,
            mood,
            energy,
            note: self.note,
            mood_name: self.mood_name,
            tags: self.tags,
            created_at: parsed.unwrap_or(fallback),
            date: self.date,
        };
        Ok((entry, restamped))
    }
}

impl From<MoodEntry> for RawMoodEntry {
    fn from(entry: MoodEntry) -> Self {
        Self {
            id: entry.id,
            mood: Some(entry.mood),
            energy: Some(entry.energy),
            note: entry.note,
            mood_name: entry.mood_name,
            tags: entry.tags,
            created_at: Some(entry.created_at.to_rfc3339()),
            date: entry.date,
        }
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => Some(raw),
        _ => None,
    })
}

fn lenient_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Tag>(item) {
            Ok(tag) => Some(tag),
            Err(e) => {
                tracing::debug!(error = %e, "Dropping unreadable tag");
                None
            }
        })
        .collect())
}

/// Parse a `created_at` value.
///
/// Accepts RFC 3339, naive date-times (read in `zone`) and bare dates
/// (local midnight in `zone`). Returns `None` for anything else.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
