use std::fmt;

use chrono::{Local, TimeZone};
use serde::Serialize;

use moodlog_core::{Config, MoodEntry, ReportingZone};

use super::{load_report, resolve_zone, SourceArgs};

#[derive(Serialize)]
struct HistoryRow<'a> {
    #[serde(flatten)]
    entry: &'a MoodEntry,
    display_date: String,
}

pub fn run(args: SourceArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match resolve_zone(args.utc_offset, config)? {
        ReportingZone::Fixed(offset) => print_history(&args, config, offset),
        ReportingZone::Local => print_history(&args, config, Local),
    }
}

fn print_history<Tz: TimeZone>(
    args: &SourceArgs,
    config: &Config,
    zone: Tz,
) -> Result<(), Box<dyn std::error::Error>>
where
    Tz::Offset: fmt::Display,
{
    let (analytics, report) = load_report(args, config, zone)?;

    let rows: Vec<HistoryRow<'_>> = report
        .history
        .iter()
        .map(|entry| HistoryRow {
            entry,
            display_date: entry.display_date(analytics.zone()),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
