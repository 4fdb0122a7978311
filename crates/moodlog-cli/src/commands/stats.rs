use chrono::{Local, TimeZone};
use serde::Serialize;

use moodlog_core::{Config, ReportingZone, Stats};

use super::{load_report, resolve_zone, SourceArgs};

#[derive(Serialize)]
struct StatsOutput<'a> {
    stats: Stats<'a>,
    /// Records left out for missing or undecodable fields.
    excluded: usize,
}

pub fn run(args: SourceArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match resolve_zone(args.utc_offset, config)? {
        ReportingZone::Fixed(offset) => print_stats(&args, config, offset),
        ReportingZone::Local => print_stats(&args, config, Local),
    }
}

fn print_stats<Tz: TimeZone>(
    args: &SourceArgs,
    config: &Config,
    zone: Tz,
) -> Result<(), Box<dyn std::error::Error>> {
    let (analytics, report) = load_report(args, config, zone)?;

    let output = StatsOutput {
        stats: analytics.stats(&report.history),
        excluded: report.excluded,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
