pub mod config;
pub mod demo;
pub mod history;
pub mod stats;

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use clap::Args;
use moodlog_core::{
    offset_from_minutes, Config, ConfigError, CoreError, FixedClock, JsonFileSource,
    MoodAnalytics, MoodReport, ReportingZone,
};

/// Where to read entries from and how to interpret time.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// JSON export to read (defaults to `source.entries_path` from config)
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Evaluate as of this RFC 3339 instant instead of the current time
    #[arg(long)]
    pub now: Option<String>,
    /// Reporting UTC offset in minutes (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,
}

/// Parse `--now`, defaulting to the wall clock.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match now {
        Some(raw) => Ok(DateTime::parse_from_rfc3339(raw)
            .map_err(|e| format!("invalid --now '{raw}': {e}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

/// Reporting zone: flag, then config, then the host timezone.
pub fn resolve_zone(flag: Option<i32>, config: &Config) -> Result<ReportingZone, ConfigError> {
    match flag {
        Some(minutes) => offset_from_minutes(minutes)
            .map(ReportingZone::Fixed)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "--utc-offset".into(),
                message: format!("{minutes} is out of range"),
            }),
        None => config.reporting_zone(),
    }
}

/// Build the engine for `zone` and load a full snapshot of entries.
pub fn load_report<Tz: TimeZone>(
    args: &SourceArgs,
    config: &Config,
    zone: Tz,
) -> Result<(MoodAnalytics<FixedClock, Tz>, MoodReport), Box<dyn std::error::Error>> {
    let now = resolve_now(args.now.as_deref())?;

    let path = match (&args.file, &config.source.entries_path) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => {
            return Err("no entry file given; pass --file or set source.entries_path".into())
        }
    };

    let analytics = MoodAnalytics::with_clock(FixedClock::new(now), zone);
    let report = analytics
        .load(&JsonFileSource::new(path))
        .map_err(CoreError::from)?;
    Ok((analytics, report))
}
